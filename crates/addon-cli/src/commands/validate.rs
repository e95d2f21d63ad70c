use std::path::PathBuf;

use clap::Args;

use addon_newrelic::values::build_values_strict;
use addon_newrelic::{NewRelicAddOnOptions, NewRelicAddOnProps};

#[derive(Args)]
pub struct ValidateArgs {
    /// Path to the add-on config file to validate
    pub config: PathBuf,
}

pub async fn execute(args: ValidateArgs) -> anyhow::Result<()> {
    println!("Validating {}...", args.config.display());

    let errors = check(&args);

    println!();
    if errors.is_empty() {
        println!("Validation PASSED");
    } else {
        println!("Validation FAILED with {} error(s):", errors.len());
        for err in &errors {
            eprintln!("  - {err}");
        }
        std::process::exit(1);
    }

    Ok(())
}

fn check(args: &ValidateArgs) -> Vec<String> {
    let props = match NewRelicAddOnProps::from_file(&args.config) {
        Ok(props) => {
            println!("  YAML parsing: OK");
            props
        }
        Err(e) => {
            println!("  YAML parsing: INVALID - {e}");
            return vec![e.to_string()];
        }
    };

    let options = NewRelicAddOnOptions::resolve(props);
    println!(
        "  Chart: {} {} ({})",
        options.chart, options.version, options.repository
    );
    println!(
        "  Release: {} in namespace {}",
        options.release, options.namespace
    );
    println!(
        "  Cluster name: {}",
        options.new_relic_cluster_name.as_deref().unwrap_or("(unset)")
    );
    println!(
        "  License key: {}",
        if options.new_relic_license_key.is_some() {
            "set"
        } else {
            "(unset)"
        }
    );
    for (feature, enabled) in [
        ("lowDataMode", options.low_data_mode),
        ("installInfrastructure", options.install_infrastructure),
        (
            "installInfrastructurePrivileged",
            options.install_infrastructure_privileged,
        ),
        ("installKSM", options.install_ksm),
        ("installPrometheus", options.install_prometheus),
        ("installLogging", options.install_logging),
    ] {
        println!("    {feature:<32} {enabled}");
    }

    let mut errors = Vec::new();
    match build_values_strict(&options) {
        Ok(_) => println!("  Values overrides: OK"),
        Err(e) => {
            println!("  Values overrides: CONFLICT - {e}");
            errors.push(e.to_string());
        }
    }
    errors
}
