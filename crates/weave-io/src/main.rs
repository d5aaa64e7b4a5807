use clap::Parser;
use weave_io::cli::{run_case, run_sweep, Cli, Commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            nodes,
            degree,
            rewire,
            self_weight,
            rounds,
            high,
            low,
            seeds_per_class,
            seed,
            require_connected,
            out,
        } => {
            run_case(
                nodes,
                degree,
                rewire,
                self_weight,
                rounds,
                high,
                low,
                seeds_per_class,
                seed,
                require_connected,
                out,
            )?;
        }

        Commands::Sweep {
            nodes,
            degree,
            rewire,
            self_weights,
            rounds,
            high,
            low,
            seeds_per_class,
            seed,
        } => {
            run_sweep(
                nodes, degree, rewire, self_weights, rounds, high, low, seeds_per_class, seed,
            )?;
        }
    }

    Ok(())
}
