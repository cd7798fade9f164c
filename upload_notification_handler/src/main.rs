use aws_config::Region;
use aws_lambda_events::event::s3::S3Event;
use lambda_runtime::{
    Error, LambdaEvent, run, service_fn,
    tracing::{self},
};
use notifier_entrypoint::NotifierEntrypoint;

mod config;
mod email;
mod handler;
mod object_info;

use config::Config;

#[tokio::main]
async fn main() -> Result<(), Error> {
    NotifierEntrypoint::default().init();

    tracing::trace!("initiating lambda");

    let config = Config::from_env()?;

    let aws_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(Region::new(config.region.clone()))
        .load()
        .await;

    let s3_client = s3_client::S3::new(aws_sdk_s3::Client::new(&aws_config));
    tracing::trace!("initialized s3 client");

    let ses_client = ses_client::Ses::new(aws_sdk_sesv2::Client::new(&aws_config));
    tracing::trace!("initialized ses client");

    let shared_s3_client = &s3_client;
    let shared_ses_client = &ses_client;
    let shared_config = &config;

    let func = service_fn(move |event: LambdaEvent<S3Event>| {
        let s3_client = shared_s3_client;
        let ses_client = shared_ses_client;
        let config = shared_config;
        async move { handler::handler(s3_client, ses_client, config, event).await }
    });

    run(func).await
}
