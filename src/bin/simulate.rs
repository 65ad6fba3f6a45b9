use napoleons_tomb::simulation::{aggregate_statistics, save_statistics, simulate_batch};

struct Args {
    num_trials: usize,
    seed: u64,
    output: Option<String>,
}

fn parse_args() -> Args {
    let args: Vec<String> = std::env::args().collect();
    let mut num_trials = 1000usize;
    let mut seed = 42u64;
    let mut output: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--trials" => {
                i += 1;
                if i < args.len() {
                    num_trials = args[i].parse().unwrap_or_else(|_| {
                        eprintln!("Invalid --trials value: {}", args[i]);
                        std::process::exit(1);
                    });
                }
            }
            "--seed" => {
                i += 1;
                if i < args.len() {
                    seed = args[i].parse().unwrap_or_else(|_| {
                        eprintln!("Invalid --seed value: {}", args[i]);
                        std::process::exit(1);
                    });
                }
            }
            "--output" => {
                i += 1;
                if i < args.len() {
                    output = Some(args[i].clone());
                }
            }
            "--help" | "-h" => {
                println!("Usage: tomb-simulate [--trials N] [--seed S] [--output DIR]");
                println!();
                println!("Options:");
                println!("  --trials N   Number of games to simulate (default: 1000)");
                println!("  --seed S     RNG seed (default: 42)");
                println!("  --output DIR Write trial_statistics.json to DIR");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                eprintln!("Usage: tomb-simulate [--trials N] [--seed S] [--output DIR]");
                std::process::exit(1);
            }
        }
        i += 1;
    }

    Args {
        num_trials,
        seed,
        output,
    }
}

fn main() {
    let args = parse_args();
    let num_threads = napoleons_tomb::env_config::init_rayon_threads();

    println!("Napoleon's Tomb Simulation ({} trials)", args.num_trials);
    println!(
        "Simulating {} games ({} threads)...",
        args.num_trials, num_threads
    );

    let result = simulate_batch(args.num_trials, args.seed);

    let per_game_us = if args.num_trials > 0 {
        result.elapsed.as_secs_f64() * 1e6 / args.num_trials as f64
    } else {
        0.0
    };
    let throughput = args.num_trials as f64 / result.elapsed.as_secs_f64().max(1e-9);

    println!(
        "  Elapsed:     {:.1} ms",
        result.elapsed.as_secs_f64() * 1000.0
    );
    println!("  Per game:    {:.1} \u{00b5}s", per_game_us);
    println!("  Throughput:  {:.0} games/sec", throughput);
    println!();

    let stats = aggregate_statistics(&result.records, args.seed);

    println!("Results:");
    println!("  Wins:        {}", stats.wins);
    println!("  Losses:      {}", stats.losses);
    println!(
        "  Win rate:    {:.2}% \u{00b1} {:.2}% (std error)",
        stats.win_rate * 100.0,
        stats.std_error * 100.0
    );
    println!(
        "  Transfers:   mean {:.1}, median {}, range {}..{}",
        stats.transfers.mean, stats.transfers.median, stats.transfers.min, stats.transfers.max
    );

    if let Some(ref output_dir) = args.output {
        let json_path = format!("{}/trial_statistics.json", output_dir);
        save_statistics(&stats, &json_path);
        println!();
        println!("  Statistics:  {}", json_path);
    }
}
