//! Integration tests for ssao-kernel.
//!
//! Library-level tests go through the public API; the CLI tests run the built
//! `ssao-kernel` binary.

use std::path::PathBuf;
use std::process::Command;

use proptest::prelude::*;
use ssao_kernel::*;

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_ssao-kernel"))
}

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("ssao_kernel_{}_{name}", std::process::id()))
}

/// Parses a GLSL kernel literal back into its declared size and components.
fn parse_glsl(text: &str) -> (usize, Vec<[f32; 4]>) {
    let mut lines = text.lines();
    let header = lines.next().unwrap();
    let size = header
        .strip_prefix("const vec4 n[")
        .and_then(|rest| rest.strip_suffix("] = vec4[]("))
        .unwrap()
        .parse()
        .unwrap();

    let body: Vec<&str> = lines.collect();
    assert_eq!(*body.last().unwrap(), ");");

    let mut vectors = Vec::new();
    for (i, line) in body[..body.len() - 1].iter().enumerate() {
        if line.is_empty() {
            continue;
        }
        let last = i + 2 == body.len();
        let inner = line
            .strip_prefix("    vec4(")
            .unwrap()
            .strip_suffix(if last { ")" } else { ")," })
            .unwrap();
        let parts: Vec<f32> = inner.split(", ").map(|p| p.parse().unwrap()).collect();
        vectors.push([parts[0], parts[1], parts[2], parts[3]]);
    }
    (size, vectors)
}

#[test]
fn test_glsl_export_matches_samples() {
    let options = KernelOptions::new()
        .with_output(OutputFormat::C)
        .with_samples(32)
        .with_seed(77);
    let mut out = Vec::new();
    let outcome = run(&options, &mut out).unwrap();

    let (size, vectors) = parse_glsl(&String::from_utf8(out).unwrap());
    assert_eq!(size, 32);
    assert_eq!(vectors.len(), 32);
    for (v, s) in vectors.iter().zip(outcome.samples.iter()) {
        assert_eq!(v[3], 0.0);
        // Display output round-trips f32 exactly
        assert_eq!(Vec3::new(v[0], v[1], v[2]), s);
    }
}

#[test]
fn test_json_export() {
    let options = KernelOptions::new()
        .with_output(OutputFormat::Json)
        .with_samples(5)
        .with_seed(3);
    let mut out = Vec::new();
    run(&options, &mut out).unwrap();
    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(value["algorithm"], "uniform");
    assert_eq!(value["count"], 5);
    assert_eq!(value["samples"].as_array().unwrap().len(), 5);
}

#[test]
fn test_histogram_plot_written() {
    let path = temp_path("hist.png");
    let options = KernelOptions::new()
        .with_output(OutputFormat::Plot2d)
        .with_seed(9)
        .with_plot(PlotOptions {
            path: Some(path.clone()),
            width: 120,
            height: 80,
            bins: 25,
        });
    let outcome = run(&options, &mut std::io::sink()).unwrap();
    assert_eq!(outcome.plot_path.as_deref(), Some(path.as_path()));
    assert!(path.exists());
    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_quiver_plot_written() {
    let path = temp_path("quiver.png");
    let options = KernelOptions::new()
        .with_output(OutputFormat::Plot)
        .with_samples(48)
        .with_seed(21)
        .with_plot(PlotOptions {
            path: Some(path.clone()),
            width: 160,
            height: 120,
            ..PlotOptions::default()
        });
    let outcome = run(&options, &mut std::io::sink()).unwrap();
    assert_eq!(outcome.plot_path.as_deref(), Some(path.as_path()));

    let saved = image::open(&path).unwrap().to_rgba8();
    assert_eq!(saved.dimensions(), (160, 120));
    // Arrows and axes leave non-background pixels
    assert!(saved.pixels().any(|p| p.0 != [255, 255, 255, 255]));
    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_plot_unsupported_extension() {
    let options = KernelOptions::new().with_seed(1).with_plot(PlotOptions {
        path: Some(temp_path("quiver.svg")),
        ..PlotOptions::default()
    });
    let err = run(&options, &mut std::io::sink()).unwrap_err();
    assert!(matches!(err, KernelError::Plot(_)));
}

#[test]
fn test_cli_glsl_output() {
    let output = bin()
        .args(["uniform", "-o", "c", "-N", "8", "-s", "3"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let (size, vectors) = parse_glsl(&stdout);
    assert_eq!(size, 8);
    assert_eq!(vectors.len(), 8);

    // Same seed, same kernel
    let again = bin()
        .args(["uniform", "-o", "c", "-N", "8", "-s", "3"])
        .output()
        .unwrap();
    assert_eq!(String::from_utf8(again.stdout).unwrap(), stdout);
}

#[test]
fn test_cli_default_sample_count() {
    let output = bin().args(["-o", "raw", "-s", "0"]).output().unwrap();
    assert!(output.status.success());
    assert_eq!(output.stdout.len(), DEFAULT_SAMPLE_COUNT * 16);
}

#[test]
fn test_cli_rejects_unknown_selectors() {
    let output = bin().arg("halton").output().unwrap();
    assert!(!output.status.success());

    let output = bin().args(["-o", "svg"]).output().unwrap();
    assert!(!output.status.success());
}

#[test]
fn test_cli_config_file() {
    let config = temp_path("config.json");
    std::fs::write(&config, r#"{ "output": "wgsl", "samples": 4, "seed": 12 }"#).unwrap();

    let output = bin().arg("--config").arg(&config).output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("const SSAO_KERNEL: array<vec4<f32>, 4>"));

    // Flags override the file
    let output = bin()
        .arg("--config")
        .arg(&config)
        .args(["-N", "2"])
        .output()
        .unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("const SSAO_KERNEL: array<vec4<f32>, 2>"));

    std::fs::write(&config, r#"{ "algorithm": "halton" }"#).unwrap();
    let output = bin().arg("--config").arg(&config).output().unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("incorrect algorithm"));

    let _ = std::fs::remove_file(&config);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_glsl_literal_well_formed(n in 0usize..96, seed in any::<u64>()) {
        let samples = uniform(n, &mut make_rng(&KernelOptions::new().with_seed(seed)));
        let mut out = Vec::new();
        write_glsl(&samples, &mut out).unwrap();
        let (size, vectors) = parse_glsl(&String::from_utf8(out).unwrap());
        prop_assert_eq!(size, n);
        prop_assert_eq!(vectors.len(), n);
        for v in vectors {
            prop_assert_eq!(v[3], 0.0);
            prop_assert!(v[1] >= 0.0);
        }
    }
}
