use std::env;
use std::fs;
use std::io::{self, IsTerminal, Read, Write};
use std::path::Path;

use anyhow::{bail, Context, Result};
use cryptenvvar::{decrypt_blocks, derive_key, encrypt_blocks};
use tracing::{debug, info, warn};

use crate::cli::Cli;
use clap::CommandFactory;

/// What the tool was asked to do, decided from flags and stream redirection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Encrypt,
    Decrypt,
    Help,
}

/// Encrypt when there is something to read and no variables to decrypt;
/// decrypt when variables are named and there is somewhere to write.
pub fn select_mode(
    has_file: bool,
    has_environment: bool,
    stdin_redirected: bool,
    stdout_redirected: bool,
) -> Mode {
    if (has_file || stdin_redirected) && !has_environment {
        Mode::Encrypt
    } else if (has_file || stdout_redirected) && has_environment {
        Mode::Decrypt
    } else {
        Mode::Help
    }
}

/// Split a `;`-delimited variable list, keeping the given order.
pub fn split_variables(list: &str) -> Vec<&str> {
    list.split(';')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .collect()
}

/// Render one block the way it is printed to the console.
pub fn format_block(number: usize, block: &str, separator: &str) -> String {
    format!("Block ({number:04})\n{separator}\n{block}\n{separator}\n")
}

/// Write the generated `--help` text to `out`.
pub fn write_help<W: Write>(out: &mut W) -> io::Result<()> {
    Cli::command().write_help(out)?;
    out.flush()
}

pub fn run(cli: &Cli) -> Result<Mode> {
    let stdin_redirected = !io::stdin().is_terminal();
    let stdout_redirected = !io::stdout().is_terminal();

    let mode = select_mode(
        cli.file.is_some(),
        cli.environment.is_some(),
        stdin_redirected,
        stdout_redirected,
    );
    debug!(?mode, stdin_redirected, stdout_redirected, "selected mode");

    match mode {
        Mode::Encrypt => encrypt_inputs(cli, stdin_redirected)?,
        Mode::Decrypt => decrypt_variables(cli, stdout_redirected)?,
        Mode::Help => {}
    }
    Ok(mode)
}

fn encrypt_inputs(cli: &Cli, stdin_redirected: bool) -> Result<()> {
    let key = derive_key(&cli.secret)?;
    let separator = cli.separator();

    if let Some(file) = cli.file.as_deref() {
        let path = Path::new(file);
        if path.is_file() {
            let payload =
                fs::read(path).with_context(|| format!("failed to read '{}'", path.display()))?;
            let blocks = encrypt_blocks(&payload, &key, cli.block_size)?;
            info!(bytes = payload.len(), blocks = blocks.len(), "encrypted file");
            print_blocks(&blocks, &separator)?;
        } else {
            warn!(file, "input file does not exist, skipping");
        }
    }

    if stdin_redirected && !cli.ignore_redirect {
        let mut payload = Vec::new();
        io::stdin()
            .lock()
            .read_to_end(&mut payload)
            .context("failed to read redirected input")?;
        let blocks = encrypt_blocks(&payload, &key, cli.block_size)?;
        info!(bytes = payload.len(), blocks = blocks.len(), "encrypted standard input");
        print_blocks(&blocks, &separator)?;
    }

    Ok(())
}

fn print_blocks(blocks: &[String], separator: &str) -> Result<()> {
    let mut out = io::stdout().lock();
    for (number, block) in blocks.iter().enumerate() {
        writeln!(out, "{}", format_block(number, block, separator))
            .context("failed to write block to the console")?;
    }
    Ok(())
}

fn decrypt_variables(cli: &Cli, stdout_redirected: bool) -> Result<()> {
    let key = derive_key(&cli.secret)?;

    let list = cli.environment.as_deref().unwrap_or_default();
    let names = split_variables(list);
    if names.is_empty() {
        bail!("no environment variables given to decrypt");
    }

    let blocks = names
        .iter()
        .map(|name| {
            env::var(name).with_context(|| format!("environment variable '{name}' is not set"))
        })
        .collect::<Result<Vec<_>>>()?;

    let payload = decrypt_blocks(&blocks, &key)?;
    info!(blocks = blocks.len(), bytes = payload.len(), "decrypted environment variables");

    if let Some(file) = cli.file.as_deref() {
        fs::write(file, &payload).with_context(|| format!("failed to write '{file}'"))?;

        if cli.verbose && (!stdout_redirected || cli.ignore_redirect) {
            let full_path = fs::canonicalize(file).unwrap_or_else(|_| file.into());
            println!(
                "The file was successfully created: '{file}' / '{}'.",
                full_path.display()
            );
            println!("File size: {}.", payload.len());
        }
    }

    if stdout_redirected && !cli.ignore_redirect {
        let mut out = io::stdout().lock();
        out.write_all(&payload)
            .and_then(|()| out.flush())
            .context("failed to write to redirected output")?;
    }

    Ok(())
}
