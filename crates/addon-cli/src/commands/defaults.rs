use clap::Args;

use addon_newrelic::NewRelicAddOnProps;

use super::OutputFormat;

#[derive(Args)]
pub struct DefaultsArgs {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Yaml)]
    pub format: OutputFormat,
}

pub fn defaults_output(args: &DefaultsArgs) -> anyhow::Result<String> {
    args.format.render(&NewRelicAddOnProps::defaults())
}

pub async fn execute(args: DefaultsArgs) -> anyhow::Result<()> {
    print!("{}", defaults_output(&args)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_table() {
        let output = defaults_output(&DefaultsArgs {
            format: OutputFormat::Yaml,
        })
        .unwrap();
        let rendered: serde_yaml::Value = serde_yaml::from_str(&output).unwrap();

        let expected: serde_yaml::Value = serde_yaml::from_str(
            r#"
namespace: newrelic
version: 3.2.11
repository: https://helm-charts.newrelic.com
release: newrelic-bundle
chart: nri-bundle
lowDataMode: true
installInfrastructure: true
installInfrastructurePrivileged: true
installKSM: true
installPrometheus: true
installLogging: true
"#,
        )
        .unwrap();
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_defaults_json_round_trips_to_props() {
        let output = defaults_output(&DefaultsArgs {
            format: OutputFormat::Json,
        })
        .unwrap();
        let props: NewRelicAddOnProps = serde_json::from_str(&output).unwrap();
        assert_eq!(props, NewRelicAddOnProps::defaults());
    }
}
