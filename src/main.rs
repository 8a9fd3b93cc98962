//! ferrocreole CLI - Wiki Creole to XHTML converter
//!
//! Usage: `ferrocreole [FILE|-]` converts FILE (or stdin) to stdout.
//! `ferrocreole --tags` lists the open/close template of every HTML tag.

use std::io::{self, Read, Write};

fn main() -> io::Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.iter().skip(1).any(|arg| arg == "--tags") {
        let tags = ferrocreole::Config::default().describe_templates();
        io::stdout().write_all(tags.as_bytes())?;
        return Ok(());
    }

    // Simple usage: read from stdin or file
    let input = if args.len() > 1 && args[1] != "-" {
        std::fs::read_to_string(&args[1])?
    } else {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    };

    log::debug!("converting {} bytes", input.len());
    let html = ferrocreole::to_html(&input);
    io::stdout().write_all(html.as_bytes())?;

    Ok(())
}
