use clap::Parser;

use cryptenvvar::consts::DEFAULT_CHUNK_CAPACITY;

/// Separator width when neither --width nor COLUMNS is set.
pub const DEFAULT_CONSOLE_WIDTH: usize = 72;

/// CryptEnvVar - encrypt small files into base64 blocks for environment variables
#[derive(Parser, Debug)]
#[command(name = "cryptenvvar")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// The secret to encrypt or decrypt data with (at least 6 characters)
    #[arg(short, long, env = "CRYPTENVVAR_SECRET", hide_env_values = true)]
    pub secret: String,

    /// File to encrypt, or file to write decrypted data to
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<String>,

    /// Size of a single encrypted block before base64 encoding
    #[arg(short, long = "block", value_name = "BYTES", default_value_t = DEFAULT_CHUNK_CAPACITY)]
    pub block_size: usize,

    /// Width of the separator lines printed around each block
    #[arg(short, long, value_name = "COLUMNS")]
    pub width: Option<usize>,

    /// Environment variables to decrypt, as a semicolon (';') delimited list
    #[arg(short, long, value_name = "VARS")]
    pub environment: Option<String>,

    /// Ignore stdin/stdout redirection (for CI/CD environments)
    #[arg(short, long)]
    pub ignore_redirect: bool,

    /// Report as much as possible (created file, sizes, debug logs)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn separator(&self) -> String {
        let columns = std::env::var("COLUMNS").ok();
        "-".repeat(separator_width(self.width, columns.as_deref()))
    }
}

/// `--width`, else a numeric `COLUMNS`, else [`DEFAULT_CONSOLE_WIDTH`].
pub fn separator_width(width: Option<usize>, columns: Option<&str>) -> usize {
    width
        .or_else(|| columns.and_then(|v| v.trim().parse().ok()))
        .unwrap_or(DEFAULT_CONSOLE_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn block_size_defaults_to_1024() {
        let cli = Cli::try_parse_from(["cryptenvvar", "-s", "Secr3t"]).unwrap();
        assert_eq!(cli.block_size, 1024);
        assert!(cli.environment.is_none());
    }

    #[test]
    fn width_falls_back_to_columns_then_default() {
        assert_eq!(separator_width(Some(10), Some("120")), 10);
        assert_eq!(separator_width(None, Some("120")), 120);
        assert_eq!(separator_width(None, Some("wide")), DEFAULT_CONSOLE_WIDTH);
        assert_eq!(separator_width(None, None), DEFAULT_CONSOLE_WIDTH);
    }

    #[test]
    fn short_flags_parse() {
        let cli = Cli::try_parse_from([
            "cryptenvvar", "-s", "Secr3t", "-b", "512", "-w", "10", "-e", "A;B", "-i", "-v",
        ])
        .unwrap();
        assert_eq!(cli.block_size, 512);
        assert_eq!(cli.separator(), "-".repeat(10));
        assert_eq!(cli.environment.as_deref(), Some("A;B"));
        assert!(cli.ignore_redirect && cli.verbose);
    }
}
