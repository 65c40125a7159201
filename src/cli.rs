/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
use crate::application::client::Client;
use crate::application::config::Config;
use crate::application::monitor::monitor_until_changed;
use crate::error::AppError;
use crate::model::auth::PasswordCredentials;
use crate::model::requests::{Limit, QueryRequest};
use crate::presentation::output::{Destination, OutputWriter};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "firestore-peek", version)]
#[command(about = "Fetch documents from a Firestore collection, anonymously first", long_about = None)]
pub struct Cli {
    /// Referer sent with sign-in requests
    #[arg(long, value_name = "REFERER", default_value = "")]
    pub referer: String,

    /// Collection to fetch documents from
    #[arg(long, value_name = "COLLECTION")]
    pub collection: Option<String>,

    /// Fetch recent documents ordered by created_at
    #[arg(long)]
    pub recent: bool,

    /// Limit the number of documents returned (default is 10)
    #[arg(long, value_name = "NUMBER", allow_hyphen_values = true)]
    pub limit: Option<String>,

    /// Keep fetching documents and exit once they change
    #[arg(long)]
    pub monitor: bool,

    /// User email for authentication
    #[arg(long, value_name = "EMAIL")]
    pub user: Option<String>,

    /// User password for authentication
    #[arg(long, value_name = "PASS")]
    pub password: Option<String>,

    /// Print JSON output to the terminal instead of saving it to a file
    #[arg(long)]
    pub output: bool,

    /// Print detailed error messages
    #[arg(long)]
    pub debug: bool,

    /// Send every request through this proxy
    #[arg(long, value_name = "URL")]
    pub proxy: Option<String>,

    /// Do not validate TLS certificates
    #[arg(long)]
    pub insecure: bool,
}

impl Cli {
    /// Builds the query request from the flags
    ///
    /// # Errors
    /// * `AppError::MissingCollection` when `--collection` is missing
    /// * `AppError::InvalidInput` when it is empty
    pub fn query_request(&self) -> Result<QueryRequest, AppError> {
        let collection = self
            .collection
            .as_deref()
            .ok_or(AppError::MissingCollection)?;
        let limit = self.limit.as_deref().map(Limit::parse).unwrap_or_default();
        QueryRequest::new(collection, limit, self.recent)
    }

    /// Email and password, only when both were given
    pub fn credentials(&self) -> Option<PasswordCredentials> {
        PasswordCredentials::from_parts(self.user.clone(), self.password.clone())
    }

    /// Applies command-line overrides to a configuration
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(proxy) = &self.proxy {
            config.http.proxy = Some(proxy.clone());
        }
        if self.insecure {
            config.http.accept_invalid_certs = true;
        }
        config
    }

    /// Where results are written
    pub fn destination(&self) -> Destination {
        if self.output {
            Destination::Terminal
        } else {
            Destination::Directory(PathBuf::from("."))
        }
    }
}

/// Runs one invocation: fetch, write, and in monitor mode poll until the documents change
pub async fn run(cli: &Cli) -> Result<(), AppError> {
    let request = cli.query_request()?;
    let credentials = cli.credentials();

    let config = Arc::new(cli.apply(Config::new()));
    debug!("Configuration: {}", config);

    let client = Client::new(config.clone(), cli.referer.as_str())?;
    let writer = OutputWriter::new(cli.destination());

    let outcome = client.fetch(&request, credentials.as_ref()).await?;
    info!("Documents read with an {} session", outcome.state);
    writer.write(&outcome.payload)?;

    if cli.monitor {
        let client = &client;
        let request = &request;
        let credentials = credentials.as_ref();
        let poll = move || async move {
            client
                .fetch(request, credentials)
                .await
                .map(|fetched| fetched.payload)
        };
        let change =
            monitor_until_changed(config.monitor_interval(), &outcome.payload, poll).await?;
        writer.write(&change.payload)?;
    }

    Ok(())
}
