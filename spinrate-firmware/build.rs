//! Build script for spinrate-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates encoder.toml at compile time
//! - Generates the configuration constants compiled into the firmware

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use spinrate_core::config::FirmwareConfig;

/// Sections that must be present in encoder.toml
const REQUIRED_SECTIONS: [&str; 2] = ["encoder", "sampler"];

fn main() {
    setup_linker();
    let config = load_config();
    generate_config(&config);
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Read, parse and validate encoder.toml
fn load_config() -> FirmwareConfig {
    println!("cargo:rerun-if-changed=encoder.toml");

    let config_path = Path::new("encoder.toml");

    if !config_path.exists() {
        fail(
            "encoder.toml not found!",
            &[
                "The firmware requires an encoder.toml configuration file",
                "in the spinrate-firmware directory.",
            ],
        );
    }

    let content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => fail("Failed to read encoder.toml", &[&e.to_string()]),
    };

    // Syntax first, so the error points at TOML rather than at a field
    let value: toml::Value = match toml::from_str(&content) {
        Ok(value) => value,
        Err(e) => {
            let msg = e.to_string();
            let lines: Vec<&str> = msg.lines().collect();
            fail("Invalid TOML syntax in encoder.toml", &lines);
        }
    };

    let missing: Vec<String> = REQUIRED_SECTIONS
        .iter()
        .filter(|section| value.get(**section).is_none())
        .map(|section| format!("• Missing [{}] section", section))
        .collect();
    if !missing.is_empty() {
        let lines: Vec<&str> = missing.iter().map(String::as_str).collect();
        fail("Missing required sections in encoder.toml", &lines);
    }

    let config: FirmwareConfig = match value.try_into() {
        Ok(config) => config,
        Err(e) => {
            let msg = e.to_string();
            let lines: Vec<&str> = msg.lines().collect();
            fail("Invalid value in encoder.toml", &lines);
        }
    };

    if let Err(e) = config.validate() {
        fail("Invalid encoder configuration", &[&e.to_string()]);
    }

    println!("cargo:warning=encoder.toml validated successfully");
    config
}

/// Write the validated configuration as a Rust constant
fn generate_config(config: &FirmwareConfig) {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    let source = format!(
        "/// Configuration compiled in from encoder.toml\n\
         pub const CONFIG: FirmwareConfig = FirmwareConfig {{\n\
         \x20   encoder: EncoderConfig {{\n\
         \x20       counts_per_rev: {counts},\n\
         \x20       poll_window: {window},\n\
         \x20       mode: DecodeMode::{mode:?},\n\
         \x20   }},\n\
         \x20   sampler: SamplerConfig {{\n\
         \x20       timer_period_us: {period},\n\
         \x20       periods_per_sample: {periods},\n\
         \x20   }},\n\
         \x20   readout: ReadoutConfig {{\n\
         \x20       refresh_ms: {refresh},\n\
         \x20       width: {width},\n\
         \x20       decimals: {decimals},\n\
         \x20   }},\n\
         \x20   motor: MotorConfig {{\n\
         \x20       enabled: {enabled},\n\
         \x20       duty_percent: {duty},\n\
         \x20   }},\n\
         }};\n",
        counts = config.encoder.counts_per_rev,
        window = config.encoder.poll_window,
        mode = config.encoder.mode,
        period = config.sampler.timer_period_us,
        periods = config.sampler.periods_per_sample,
        refresh = config.readout.refresh_ms,
        width = config.readout.width,
        decimals = config.readout.decimals,
        enabled = config.motor.enabled,
        duty = config.motor.duty_percent,
    );

    fs::write(out_dir.join("config.rs"), source).unwrap();
}

/// Abort the build with a boxed error message
fn fail(title: &str, lines: &[&str]) -> ! {
    let body = lines
        .iter()
        .map(|line| {
            let truncated = if line.len() > 64 {
                format!("{}...", &line[..61])
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n");

    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: {:<58} ║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        title, body
    );
}
