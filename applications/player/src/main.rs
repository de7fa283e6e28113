/// Memora Player - console front end for memory playback queues
use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use memora_player::{sources::SourceSpec, Console, LoggingEngine, PlayerConfig};
use memora_playback::{engine_channel, lock, shared, QueueListener, QueueManager};
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "memora-player")]
#[command(about = "Play a memory's tracks from the console", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, env = "MEMORA_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Queue tracks and control playback from stdin
    Play {
        #[command(flatten)]
        source: SourceArgs,

        /// Position to start playing from (0-based)
        #[arg(long, default_value_t = 0)]
        start: usize,

        /// Shuffle right after the queue is set
        #[arg(long)]
        shuffle: bool,
    },
    /// Print the tracks a source yields
    List {
        #[command(flatten)]
        source: SourceArgs,

        /// Only list matching tracks (title or tags; title only for --dir)
        #[arg(short, long)]
        query: Option<String>,
    },
}

#[derive(Args)]
struct SourceArgs {
    /// JSON track list as returned by the backend
    #[arg(
        long,
        required_unless_present_any = ["dir", "suggestions"],
        conflicts_with_all = ["dir", "suggestions"]
    )]
    tracks: Option<PathBuf>,

    /// Local folder of audio files
    #[arg(long, conflicts_with = "suggestions")]
    dir: Option<PathBuf>,

    /// JSON list of AI-suggested tracks
    #[arg(long)]
    suggestions: Option<PathBuf>,

    /// Memory name to narrow a JSON track list to
    #[arg(long, requires = "tracks")]
    memory: Option<String>,

    /// User id to narrow a JSON track list to, or to attribute suggestions to
    #[arg(long, conflicts_with = "dir")]
    user: Option<String>,
}

impl SourceArgs {
    fn spec(self) -> anyhow::Result<SourceSpec> {
        match (self.tracks, self.dir, self.suggestions) {
            (Some(path), None, None) => Ok(SourceSpec::Json {
                path,
                memory: self.memory,
                user: self.user,
            }),
            (None, Some(root), None) => Ok(SourceSpec::Folder(root)),
            (None, None, Some(path)) => Ok(SourceSpec::Suggestions {
                path,
                user: self.user,
            }),
            _ => anyhow::bail!("pass exactly one of --tracks, --dir or --suggestions"),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = PlayerConfig::load(cli.config.as_deref())?;
    config.validate()?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.logging.filter.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    match cli.command {
        Commands::Play {
            source,
            start,
            shuffle,
        } => play(&config, source.spec()?, start, shuffle),
        Commands::List { source, query } => list(&config, source.spec()?, query.as_deref()),
    }
}

fn play(
    config: &PlayerConfig,
    spec: SourceSpec,
    start: usize,
    shuffle: bool,
) -> anyhow::Result<()> {
    let source = spec.build(&config.library);
    let tracks = source
        .tracks()
        .with_context(|| format!("Failed to load tracks from {}", source.describe()))?;

    if tracks.is_empty() {
        anyhow::bail!("{} has no tracks", source.describe());
    }
    if start >= tracks.len() {
        tracing::warn!(
            start,
            len = tracks.len(),
            "Start position is past the end, nothing will play"
        );
    }

    tracing::info!("Loaded {} tracks from {}", tracks.len(), source.describe());

    let manager = shared(QueueManager::new(
        Box::new(LoggingEngine::new()),
        config.playback.clone(),
    ));
    let (events_tx, events_rx) = engine_channel(&config.playback);
    let listener = QueueListener::spawn(Arc::clone(&manager), events_rx)
        .context("Failed to start queue listener")?;

    {
        let mut manager = lock(&manager);
        manager.set_queue(tracks.clone(), start);
        if shuffle {
            manager.toggle_shuffle();
        }
    }

    let console = Console::new(Arc::clone(&manager), events_tx, tracks);
    println!("Type `help` for commands.");
    let executed = console.run(io::stdin().lock(), io::stdout().lock())?;

    // Dropping the console closes the engine channel and stops the listener
    drop(console);
    let handled = listener
        .join()
        .map_err(|_| anyhow::anyhow!("Queue listener panicked"))?;

    tracing::info!(executed, engine_events = handled, "Player stopped");
    Ok(())
}

fn list(config: &PlayerConfig, spec: SourceSpec, query: Option<&str>) -> anyhow::Result<()> {
    let source = spec.build(&config.library);
    let mut tracks = source
        .tracks()
        .with_context(|| format!("Failed to load tracks from {}", source.describe()))?;

    if let Some(query) = query {
        tracks = spec.search(&tracks, query);
    }

    for (i, track) in tracks.iter().enumerate() {
        println!("{:>3}. {} - {} ({})", i + 1, track.title, track.artist, track.url);
    }
    println!("{} track(s)", tracks.len());

    Ok(())
}
