//! swex CLI — driving adapter for the swex matcher library.
//!
//! Subcommands:
//! - `eval <spec> <text>...` — compile a spec file and test strings against it
//! - `check <spec>` — validate a spec file loads without errors
//! - `demo [text]` — walk a string through a sample switch expression

use std::process;

use swex::{ContainsMatcher, MatchPos, MatchSpec, SwitchStr};

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let result = match args[1].as_str() {
        "eval" => cmd_eval(&args[2..]),
        "check" => cmd_check(&args[2..]),
        "demo" => cmd_demo(&args[2..]),
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        other => {
            eprintln!("error: unknown command \"{other}\"");
            print_usage();
            process::exit(1);
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Commands
// ═══════════════════════════════════════════════════════════════════════════════

fn cmd_eval(args: &[String]) -> Result<(), String> {
    if args.len() < 2 {
        return Err("eval requires a spec file path and at least one text".into());
    }

    let spec = load_spec(&args[0])?;
    let matcher = spec
        .to_matcher()
        .map_err(|e| format!("spec invalid: {e}"))?;

    for text in &args[1..] {
        let verdict = if matcher.is_matching(text) {
            "match"
        } else {
            "no match"
        };
        println!("{text}: {verdict}");
    }

    Ok(())
}

fn cmd_check(args: &[String]) -> Result<(), String> {
    if args.is_empty() {
        return Err("check requires a spec file path".into());
    }

    let spec = load_spec(&args[0])?;
    spec.validate().map_err(|e| format!("spec invalid: {e}"))?;

    println!("Spec valid: {spec}");
    Ok(())
}

#[allow(clippy::unnecessary_wraps)] // Uniform return type for all commands
fn cmd_demo(args: &[String]) -> Result<(), String> {
    let text = args.first().map_or("Ceci est un string", String::as_str);

    let pos = MatchPos::new();
    let verdict = SwitchStr::new(text)
        .case(ContainsMatcher::first("foo").record_into(&pos), "foo")
        .case(ContainsMatcher::first("est").record_into(&pos), "est")
        .case(|s: &str| s.len() > 40, "long string")
        .otherwise("no case matched");

    println!("text:    {text:?}");
    println!("verdict: {verdict}");
    match pos.get() {
        Some(at) => println!("found at byte {at}"),
        None => println!("no position recorded"),
    }

    Ok(())
}

// ═══════════════════════════════════════════════════════════════════════════════
// Spec loading
// ═══════════════════════════════════════════════════════════════════════════════

fn load_spec(path: &str) -> Result<MatchSpec, String> {
    let content =
        std::fs::read_to_string(path).map_err(|e| format!("failed to read \"{path}\": {e}"))?;

    let is_json = std::path::Path::new(path)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        serde_json::from_str(&content).map_err(|e| format!("JSON parse error: {e}"))
    } else {
        // Default to YAML (handles .yaml and .yml)
        serde_yaml::from_str(&content).map_err(|e| format!("YAML parse error: {e}"))
    }
}

fn print_usage() {
    eprintln!(
        "Usage: swex <command> [options]

Commands:
  eval <spec> <text>...   Compile spec and test each text against it
  check <spec>            Validate spec file
  demo [text]             Run a sample switch expression over text
  help                    Show this help"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_defaults_without_args() {
        assert!(cmd_demo(&[]).is_ok());
    }

    #[test]
    fn eval_requires_spec_and_text() {
        assert!(cmd_eval(&[]).is_err());
        assert!(cmd_eval(&["only-spec.yaml".into()]).is_err());
    }

    #[test]
    fn check_reports_missing_file() {
        let err = cmd_check(&["/no/such/file.yaml".into()]).unwrap_err();
        assert!(err.contains("failed to read"));
    }
}
