use roamer::config::Config;
use roamer::engine::Engine;
use roamer::error::Error;
use roamer::server::serve;

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = Config::from_env()?;
    let addr = config.addr;

    let engine = Engine::new(config);

    serve(engine, addr).await
}
