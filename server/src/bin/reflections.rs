use server::{config::Config, reflections, serve};
use store::Repository;

#[tokio::main]
async fn main() {
    server::init_tracing();

    let config = Config::load(reflections::DEFAULT_PORT);
    let repo = Repository::open(config.data_file(reflections::DATA_FILE));

    serve(reflections::app(repo), config.port).await;
}
