use std::path::PathBuf;

use clap::Parser;

/// Turn a keyboard into a virtual gamepad.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub(crate) struct Cli {
    /// Path to the YAML preset
    pub preset: PathBuf,

    /// Input device name, overrides the preset's `input`
    #[arg(short, long, value_name = "NAME")]
    pub input: Option<String>,

    /// Turn debugging information on
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use key2joy_preset::parse_preset;

    use super::*;

    #[test]
    fn command_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_preset_only() {
        let cli = Cli::try_parse_from(["key2joy", "wasd.yaml"]).expect("parse");
        assert_eq!(cli.preset, PathBuf::from("wasd.yaml"));
        assert_eq!(cli.input, None);
        assert!(!cli.verbose);
        assert!(!cli.no_color);
    }

    #[test]
    fn parses_all_flags() {
        let cli = Cli::try_parse_from([
            "key2joy",
            "--input",
            "AT Translated Set 2 keyboard",
            "-v",
            "--no-color",
            "wasd.yaml",
        ])
        .expect("parse");
        assert_eq!(cli.input.as_deref(), Some("AT Translated Set 2 keyboard"));
        assert!(cli.verbose);
        assert!(cli.no_color);

        let cli = Cli::try_parse_from(["key2joy", "-i", "kbd", "p.yaml"]).expect("parse");
        assert_eq!(cli.input.as_deref(), Some("kbd"));
    }

    #[test]
    fn preset_path_is_required() {
        assert!(Cli::try_parse_from(["key2joy"]).is_err());
    }

    #[test]
    fn input_flag_overrides_preset() {
        let cli = Cli::try_parse_from(["key2joy", "-i", "USB Keyboard", "p.yaml"])
            .expect("parse");
        let yaml = "input: Laptop Keyboard\nbuttons:\n  KEY_A: BUTTON_A\n";

        let preset = parse_preset(yaml, cli.input.as_deref()).expect("preset");
        assert_eq!(preset.input(), Some("USB Keyboard"));

        let preset = parse_preset(yaml, None).expect("preset");
        assert_eq!(preset.input(), Some("Laptop Keyboard"));
    }
}
