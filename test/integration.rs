// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

use crate::{Binary, TopicsFixture};

use anyhow::Result;
use indoc::indoc;
use pretty_assertions::assert_eq;

#[test]
fn get_topics_prints_ordered_paths() -> Result<()> {
    let fixture = TopicsFixture::new()?;
    fixture
        .touch(["git.sh", "git.bash", "aws.bash", "darwin/git.bash"])?
        .write("initial-topics", "aws\n")?;

    let output = Binary::GetTopics.run(
        [fixture.root().as_os_str(), "bash".as_ref()],
        &[("TOPICAL_PLATFORM", "darwin")],
    )?;
    assert!(output.status.success());

    let expect = [
        fixture.topic("aws.bash"),
        fixture.topic("git.sh"),
        fixture.topic("git.bash"),
        fixture.topic("darwin/git.bash"),
    ]
    .join("\n");
    assert_eq!(String::from_utf8(output.stdout)?, expect);
    Ok(())
}

#[test]
fn get_topics_print0_and_platform_flag() -> Result<()> {
    let fixture = TopicsFixture::new()?;
    fixture.touch(["a.sh", "b.zsh", "wsl/a.zsh"])?;

    let output = Binary::GetTopics.run(
        [
            fixture.root().as_os_str(),
            "zsh".as_ref(),
            "--print0".as_ref(),
            "--platform".as_ref(),
            "wsl".as_ref(),
        ],
        &[("TOPICAL_PLATFORM", "darwin")],
    )?;
    assert!(output.status.success());

    let expect = [
        fixture.topic("a.sh"),
        fixture.topic("wsl/a.zsh"),
        fixture.topic("b.zsh"),
    ]
    .join("\0");
    assert_eq!(String::from_utf8(output.stdout)?, expect);
    Ok(())
}

#[test]
fn get_topics_non_interactive() -> Result<()> {
    let fixture = TopicsFixture::new()?;
    fixture
        .touch(["git.sh", "prompt.bash", "path.sh"])?
        .write(
            "non-interactive-topics",
            indoc! {"
                path
                git
            "},
        )?;

    let output = Binary::GetTopics.run(
        [
            fixture.root().as_os_str(),
            "bash".as_ref(),
            "--non-interactive".as_ref(),
        ],
        &[("TOPICAL_PLATFORM", "linux")],
    )?;
    assert!(output.status.success());

    let expect = [fixture.topic("git.sh"), fixture.topic("path.sh")].join("\n");
    assert_eq!(String::from_utf8(output.stdout)?, expect);
    Ok(())
}

#[test]
fn get_topics_empty_root_succeeds() -> Result<()> {
    let fixture = TopicsFixture::new()?;

    let output = Binary::GetTopics.run([fixture.root().as_os_str(), "zsh".as_ref()], &[])?;
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    Ok(())
}

#[test]
fn get_topics_missing_root_fails() -> Result<()> {
    let fixture = TopicsFixture::new()?;
    fixture.touch(["git.sh"])?;
    let missing = fixture.root().join("missing");

    let output = Binary::GetTopics.run([missing.as_os_str(), "bash".as_ref()], &[])?;
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8(output.stderr)?.contains("not an existing directory"));
    Ok(())
}

#[test]
fn get_topics_warns_about_unusual_shell() -> Result<()> {
    let fixture = TopicsFixture::new()?;
    fixture.touch(["git.sh", "git.fish"])?;

    let output = Binary::GetTopics.run(
        [fixture.root().as_os_str(), "fish".as_ref()],
        &[("TOPICAL_PLATFORM", "linux")],
    )?;
    assert!(output.status.success());
    assert!(String::from_utf8(output.stderr)?.contains("unusual shell"));

    let expect = [fixture.topic("git.sh"), fixture.topic("git.fish")].join("\n");
    assert_eq!(String::from_utf8(output.stdout)?, expect);
    Ok(())
}

#[test]
fn get_topics_unusual_shell_warning_ignores_log_level() -> Result<()> {
    let fixture = TopicsFixture::new()?;
    fixture.touch(["git.sh"])?;

    let output = Binary::GetTopics.run(
        [fixture.root().as_os_str(), "fish".as_ref()],
        &[("TOPICAL_PLATFORM", "linux"), ("RUST_LOG", "off")],
    )?;
    assert!(output.status.success());
    assert!(String::from_utf8(output.stderr)?.contains("unusual shell \"fish\""));
    assert_eq!(String::from_utf8(output.stdout)?, fixture.topic("git.sh"));
    Ok(())
}

#[test]
fn get_platform_prints_identifier() -> Result<()> {
    let output = Binary::GetPlatform.run(Vec::<&str>::new(), &[("MSYSTEM", "MINGW64")])?;
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout)?, "mingw\n");
    Ok(())
}

#[cfg(unix)]
#[test]
fn dedup_path_prints_export() -> Result<()> {
    let output = Binary::DedupPath.run(
        ["--remove", "/opt/old/bin"],
        &[("PATH", "/usr/local/bin:/usr/bin:/opt/old/bin:/usr/local/bin:/bin")],
    )?;
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout)?,
        "export PATH=\"/usr/local/bin:/usr/bin:/bin\"\n"
    );
    Ok(())
}
