use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use std::fs;
use tempfile::TempDir;

const FIXTURE: &str = "tests/fixtures/triangle.json";

fn cmd() -> Command {
    Command::cargo_bin("zengl-export").unwrap()
}

#[test]
fn dump_to_stdout() {
    cmd()
        .args(["dump", FIXTURE])
        .assert()
        .success()
        .stdout(contains("unsigned buffer1 = 0;"))
        .stdout(contains("glBufferData(GL_ARRAY_BUFFER, 64, data, GL_DYNAMIC_DRAW);"))
        .stdout(contains("glFramebufferTexture2D(GL_FRAMEBUFFER, GL_DEPTH_ATTACHMENT, GL_TEXTURE_2D, image2, 0);"))
        .stdout(contains("glSamplerParameteri(sampler1, GL_TEXTURE_MIN_FILTER, GL_LINEAR_MIPMAP_LINEAR);"))
        .stdout(contains("glUniformBlockBinding(program1, glGetUniformBlockIndex(program1, \"Common\"), 0);"))
        .stdout(contains("glUniform1i(glGetUniformLocation(program1, \"Texture\"), 0);"))
        .stdout(contains("float uniform1_0[] = {0.5};"))
        .stdout(contains("glBindBufferRange(GL_UNIFORM_BUFFER, 0, buffer2, 0, 64);"))
        .stdout(contains("glBlendFuncSeparate(GL_SRC_ALPHA, GL_ONE_MINUS_SRC_ALPHA, GL_ONE, GL_ZERO);"))
        .stdout(contains("glEnablei(GL_BLEND, 0);"))
        .stdout(contains("glDepthFunc(GL_LESS);"))
        .stdout(contains("glDrawArraysInstanced(GL_TRIANGLES, 0, 3, 1);"))
        .stdout(contains("glBlitFramebuffer(0, 0, width, height, 0, 0, width, height, GL_COLOR_BUFFER_BIT, GL_NEAREST);"));
}

#[test]
fn dump_to_file() {
    let tmp = TempDir::new().unwrap();
    let out = tmp.path().join("triangle.c");

    cmd()
        .args(["dump", FIXTURE, "-o"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let text = fs::read_to_string(&out).unwrap();
    assert!(text.starts_with("unsigned buffer1 = 0;\n"));
    assert!(text.ends_with("glEnable(GL_FRAMEBUFFER_SRGB);\n"));
}

#[test]
fn dump_without_fixed_blocks() {
    cmd()
        .args(["dump", FIXTURE, "--no-defaults", "--no-blit"])
        .assert()
        .success()
        .stdout(contains("glPrimitiveRestartIndex").not())
        .stdout(contains("glBlitFramebuffer").not())
        .stdout(contains("glUseProgram(program1);"));
}

#[test]
fn blit_from_named_image() {
    cmd()
        .args(["dump", FIXTURE, "--blit-source", "color"])
        .assert()
        .success()
        .stdout(contains("glBindFramebuffer(GL_READ_FRAMEBUFFER, framebuffer1);"))
        .stdout(contains("glBlitFramebuffer(0, 0, 512, 512, 0, 0, 512, 512, GL_COLOR_BUFFER_BIT, GL_NEAREST);"));
}

#[test]
fn blit_source_must_be_a_render_target() {
    cmd()
        .args(["dump", FIXTURE, "--blit-source", "texture"])
        .assert()
        .failure()
        .stderr(contains("resolving --blit-source"));
}

#[test]
fn inspect_text() {
    cmd()
        .args(["inspect", FIXTURE])
        .assert()
        .success()
        .stdout(contains("buffers:       2"))
        .stdout(contains("images:        3"))
        .stdout(contains("pipelines:     1"));
}

#[test]
fn inspect_json() {
    let output = cmd().args(["inspect", FIXTURE, "--json"]).output().unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["samplers"], 1);
    assert_eq!(report["shaders"], 2);
    assert_eq!(report["framebuffers"], 1);
}

#[test]
fn invalid_snapshot_reports_context() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("bad.json");
    fs::write(&path, r#"{"images": [{"name": "a", "size": [0, 4], "format": "rgba8unorm"}]}"#).unwrap();

    cmd()
        .arg("dump")
        .arg(&path)
        .assert()
        .failure()
        .stderr(contains("building context from"))
        .stderr(contains("invalid image size: 0x4"));
}

#[test]
fn missing_file() {
    cmd()
        .args(["dump", "does/not/exist.json"])
        .assert()
        .failure()
        .stderr(contains("reading does/not/exist.json"));
}
