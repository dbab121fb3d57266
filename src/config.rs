use clap::Parser;

// CLI argument structure; every flag can also come from the environment
#[derive(Parser, Debug, Clone)]
#[command(name = "prize-wheel")]
#[command(about = "Daily prize wheel HTTP service")]
pub struct Args {
    // Port to run the server on
    #[arg(short, long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    // Redis connection URL for spin records
    // When unset, records live in process memory and are lost on restart
    #[arg(long, env = "REDIS_URL")]
    pub redis_url: Option<String>,

    // Minimum spacing between requests from one user, in milliseconds
    #[arg(long, default_value_t = 2000)]
    pub cooldown_ms: i64,
}
