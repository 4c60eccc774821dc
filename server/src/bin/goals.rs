use server::{config::Config, goals, serve};
use store::Repository;

#[tokio::main]
async fn main() {
    server::init_tracing();

    let config = Config::load(goals::DEFAULT_PORT);
    let repo = Repository::open(config.data_file(goals::DATA_FILE));

    serve(goals::app(repo), config.port).await;
}
