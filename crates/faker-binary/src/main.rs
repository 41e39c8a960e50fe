use clap::crate_version;
use tokio::runtime;

mod args;
mod server_runtime;
mod telemetry;

const THREAD_NAME: &str = "graphql-faker";

fn main() -> anyhow::Result<()> {
    let args = self::args::parse();
    let config = args.config()?;

    let runtime = runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name(THREAD_NAME)
        .build()?;

    runtime.block_on(async move {
        telemetry::init(&args)?;

        let crate_version = crate_version!();
        tracing::info!("GraphQL Faker {crate_version}");

        let runtime = server_runtime::build(args.open);

        faker_server::serve(config, runtime).await?;

        Ok::<(), anyhow::Error>(())
    })?;

    Ok(())
}
