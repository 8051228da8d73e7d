use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use mips_asm_rs::assemble;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Assemble a reduced MIPS-like program into 32-bit words"
)]
struct Opts {
    /// Input assembly file (one label or instruction per line)
    #[arg(value_name = "ASMFILE")]
    input: PathBuf,
    /// Output file (default: input path with `.bin` appended)
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Output rendering
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// One 32-character binary string per word
    Text,
    /// JSON array of words
    Json,
}

fn render_text(words: &[u32]) -> String {
    let mut buf = String::new();
    for w in words {
        let _ = writeln!(buf, "{w:032b}");
    }
    buf
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let opts = Opts::parse();
    let source = fs::read_to_string(&opts.input)?;

    let words = match assemble(&source) {
        Ok(words) => words,
        Err(errors) => {
            for e in &errors {
                eprintln!("error: {e}");
            }
            anyhow::bail!("assembly failed with {} error(s)", errors.len());
        }
    };

    let out_path = opts.output.unwrap_or_else(|| {
        let mut p = opts.input.clone().into_os_string();
        p.push(".bin");
        PathBuf::from(p)
    });

    let rendered = match opts.format {
        OutputFormat::Text => render_text(&words),
        OutputFormat::Json => serde_json::to_string_pretty(&words)?,
    };
    fs::write(&out_path, rendered)?;

    tracing::info!(words = words.len(), out = %out_path.display(), "assembled");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_rendering_is_32_binary_digits_per_word() {
        let out = render_text(&[5, 0x8000_0000]);
        let mut lines = out.lines();
        assert_eq!(lines.next(), Some("00000000000000000000000000000101"));
        assert_eq!(lines.next(), Some("10000000000000000000000000000000"));
        assert_eq!(lines.next(), None);
    }
}
