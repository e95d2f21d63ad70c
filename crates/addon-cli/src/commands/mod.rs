use clap::{Subcommand, ValueEnum};
use serde::Serialize;

pub mod defaults;
pub mod render;
pub mod validate;

#[derive(Subcommand)]
pub enum Commands {
    /// Render the Helm chart request the add-on would install
    Render(render::RenderArgs),
    /// Validate an add-on config file without rendering
    Validate(validate::ValidateArgs),
    /// Print the default add-on options
    Defaults(defaults::DefaultsArgs),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Yaml,
    Json,
}

impl OutputFormat {
    /// Serialize `value`, always ending in a newline.
    pub fn render<T: Serialize>(self, value: &T) -> anyhow::Result<String> {
        Ok(match self {
            Self::Yaml => serde_yaml::to_string(value)?,
            Self::Json => serde_json::to_string_pretty(value)? + "\n",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_render_formats() {
        let value = BTreeMap::from([("chart", "nri-bundle")]);
        assert_eq!(OutputFormat::Yaml.render(&value).unwrap(), "chart: nri-bundle\n");
        assert_eq!(
            OutputFormat::Json.render(&value).unwrap(),
            "{\n  \"chart\": \"nri-bundle\"\n}\n"
        );
    }
}
