use server::{config::Config, funfacts, serve};
use store::Repository;

#[tokio::main]
async fn main() {
    server::init_tracing();

    let config = Config::load(funfacts::DEFAULT_PORT);
    let repo = Repository::open(config.data_file(funfacts::DATA_FILE));

    serve(funfacts::app(repo), config.port).await;
}
