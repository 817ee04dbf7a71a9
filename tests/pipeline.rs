//! End-to-end pipeline tests against a stub toolchain.
//!
//! Every binary is replaced with `echo`, so the captured stdout is exactly
//! the argument sequence the driver rendered.

use cc65_driver::{
    AssemblerFeature, AssemblerOptions, CompilerOptions, LinkerOptions, LinkerTarget,
    ObjectToolOptions, Optimizer, OptimizerSetting, TargetSystem, Toolchain,
};

fn echo_toolchain() -> Toolchain {
    Toolchain {
        cc65: "echo".to_string(),
        ca65: "echo".to_string(),
        ld65: "echo".to_string(),
        co65: "echo".to_string(),
        working_dir: None,
    }
}

#[tokio::test]
async fn compile_assemble_link_convert_round() {
    let toolchain = echo_toolchain();

    let compile = CompilerOptions {
        target: Some(TargetSystem::C64),
        optimizer: Optimizer::Enabled {
            settings: vec![OptimizerSetting::InlineStdFuncs],
        },
        ..Default::default()
    };
    let out = toolchain.compile(&compile, "main.c").await.unwrap();
    assert_eq!(out.stdout, "--target c64 -Os main.c\n");

    let assemble = AssemblerOptions {
        target: Some(TargetSystem::C64),
        features: vec![AssemblerFeature::CComments],
        ..Default::default()
    };
    let out = toolchain.assemble(&assemble, "main.s").await.unwrap();
    assert_eq!(out.stdout, "--target c64 --feature c_comments main.s\n");

    let link = LinkerOptions {
        target: Some(LinkerTarget::C64),
        libs: vec!["c64.lib".to_string()],
        ..Default::default()
    };
    let out = toolchain.link(&link, &["main.o"]).await.unwrap();
    assert_eq!(out.stdout, "--target c64 --lib c64.lib main.o\n");

    let convert = ObjectToolOptions {
        output_name: Some("main.s".to_string()),
        ..Default::default()
    };
    let out = toolchain.convert(&convert, "main.o").await.unwrap();
    assert_eq!(out.stdout, "--output-name main.s main.o\n");
}

#[tokio::test]
async fn concurrent_invocations_share_no_state() {
    let toolchain = echo_toolchain();
    let options = CompilerOptions::default();

    let (a, b, c) = tokio::join!(
        toolchain.compile(&options, "a.c"),
        toolchain.compile(&options, "b.c"),
        toolchain.compile(&options, "c.c"),
    );
    assert_eq!(a.unwrap().stdout, "a.c\n");
    assert_eq!(b.unwrap().stdout, "b.c\n");
    assert_eq!(c.unwrap().stdout, "c.c\n");
}

#[tokio::test]
async fn failure_carries_exit_code_through_public_api() {
    let toolchain = Toolchain {
        cc65: "false".to_string(),
        ..Default::default()
    };
    let err = toolchain
        .compile(&CompilerOptions::default(), "main.c")
        .await
        .unwrap_err();
    match err {
        cc65_driver::DriverError::Tool { tool, code, .. } => {
            assert_eq!(tool, cc65_driver::Tool::Compiler);
            assert_eq!(code, Some(1));
        }
        other => panic!("unexpected error: {other}"),
    }
}
