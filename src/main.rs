#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use broadside::{
    init_logging, ui, CliPlayer, GameEngine, PlayerNode, RepeatShotPolicy, Role, SessionOutcome,
    TcpTransport, DEFAULT_PORT,
};

#[cfg(feature = "std")]
use clap::{Parser, ValueEnum};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use std::io::{self, BufRead, Write};
#[cfg(feature = "std")]
use tokio::net::TcpListener;
#[cfg(feature = "std")]
use tokio::time::Duration;

#[derive(Parser)]
#[command(author, version, about = "Two-player naval combat over a direct TCP connection", long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
#[cfg(feature = "std")]
enum RepeatShots {
    /// Always answer MISS.
    Miss,
    /// Re-report what the cell holds.
    Stored,
}

#[cfg(feature = "std")]
impl From<RepeatShots> for RepeatShotPolicy {
    fn from(value: RepeatShots) -> Self {
        match value {
            RepeatShots::Miss => RepeatShotPolicy::ReportMiss,
            RepeatShots::Stored => RepeatShotPolicy::ReportStored,
        }
    }
}

#[derive(clap::Args, Debug)]
#[cfg(feature = "std")]
struct SessionArgs {
    #[arg(long, help = "Display name sent to the opponent (prompted if absent)")]
    name: Option<String>,
    #[arg(long, help = "Fix RNG seed for reproducible placement (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, help = "Give up if the opponent sends nothing for this many seconds")]
    read_timeout: Option<u64>,
    #[arg(long, value_enum, default_value_t = RepeatShots::Miss)]
    repeat_shots: RepeatShots,
}

#[derive(clap::Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Create a game and wait for the opponent to connect. The host shoots first.
    Host {
        #[arg(long, default_value_t = format!("0.0.0.0:{}", DEFAULT_PORT))]
        bind: String,
        #[command(flatten)]
        session: SessionArgs,
    },
    /// Join a game hosted by the opponent.
    Join {
        #[arg(long, default_value_t = format!("127.0.0.1:{}", DEFAULT_PORT))]
        connect: String,
        #[command(flatten)]
        session: SessionArgs,
    },
}

#[cfg(feature = "std")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    println!("=== BROADSIDE ===");

    let (role, session, stream) = match cli.command {
        Commands::Host { bind, session } => {
            println!("Starting game at {}...", bind);
            let listener = TcpListener::bind(&bind).await?;
            println!("Waiting for the opponent to connect...");
            let (stream, addr) = listener.accept().await?;
            println!("Opponent connected from {}", addr);
            (Role::Host, session, stream)
        }
        Commands::Join { connect, session } => {
            println!("Connecting to {}...", connect);
            let stream = tokio::net::TcpStream::connect(&connect).await?;
            println!("Connected successfully!");
            (Role::Guest, session, stream)
        }
    };

    let name = match session.name {
        Some(name) => name,
        None => prompt_name()?,
    };
    let transport = match session.read_timeout {
        Some(secs) => TcpTransport::with_timeout(stream, Duration::from_secs(secs)),
        None => TcpTransport::new(stream),
    };
    let mut rng = if let Some(s) = session.seed {
        println!("Using fixed seed: {} (placement will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };

    let mut engine = GameEngine::with_policy(session.repeat_shots.into());
    engine.place_fleet(&mut rng)?;
    println!("Your ships have been placed.");
    ui::print_own_view(&engine);

    let mut node = PlayerNode::new(
        Box::new(CliPlayer::new()),
        engine,
        Box::new(transport),
        role,
    );
    let result = match node.handshake(&name).await {
        Ok(peer) => {
            println!("Playing against: {}", peer);
            match role {
                Role::Host => println!("Both players ready. You shoot first!"),
                Role::Guest => println!("Both players ready. The opponent shoots first..."),
            }
            node.run().await
        }
        Err(e) => Err(e),
    };

    match result {
        Ok(SessionOutcome::Won) => {
            println!("\n=== VICTORY ===");
            println!("You have sunk the whole enemy fleet!");
        }
        Ok(SessionOutcome::Lost) => {
            ui::print_own_view(node.engine());
            println!("\n=== DEFEAT ===");
            println!("All your ships have been destroyed.");
        }
        Err(e) => {
            eprintln!("Session aborted ({}): {}", e.kind(), e);
            std::process::exit(1);
        }
    }
    Ok(())
}

#[cfg(feature = "std")]
fn prompt_name() -> anyhow::Result<String> {
    print!("Enter your name: ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}
