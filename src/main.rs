use clap::Parser;
use miette::Result;
use stackup::cli::{Cli, Commands};

fn main() -> Result<()> {
    // Install miette's fancy error handler for beautiful diagnostics
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .tab_width(4)
                .build(),
        )
    }))?;

    let cli = Cli::parse();

    stackup::cli::logging::init(cli.global.verbose, cli.global.quiet);
    if cli.global.no_color {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    match cli.command {
        Commands::Calc(args) => stackup::cli::commands::calc::run(args, &cli.global),
        Commands::Interactive(args) => stackup::cli::commands::interactive::run(args, &cli.global),
        Commands::Config(args) => stackup::cli::commands::config::run(args, &cli.global),
        Commands::Completions(args) => stackup::cli::commands::completions::run(args),
    }
}
