use std::{
    fs, io,
    path::{Path, PathBuf},
    time::Duration,
};

use actix_cors::Cors;
use actix_web::{
    middleware::{self, Condition},
    web::Data,
    App, HttpServer,
};
use addressbook::{
    clients::server,
    consts::consts::{ContactsUri, DEFAULT_PORT},
    database::{database::Database, options::DatabaseOptions},
    model::person::PersonPayload,
    resources::{contacts::ContactsResource, person::PersonResource},
};
use clap::Parser;

/// 📇 Address book server, exposes a contacts collection over a JSON REST interface
#[derive(Parser, Debug)]
struct Cli {
    /// Port the http server will run on
    #[clap(short, long, default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Address the http server will run on
    #[clap(short, long, default_value = "0.0.0.0")]
    address: String,

    /// Public root used to build person links, defaults to http://localhost:<port>
    #[clap(long)]
    public_url: Option<String>,

    /// JSON file containing a list of people to create on startup, e.g. [{"name": "Salvador"}]
    #[clap(short, long)]
    seed: Option<PathBuf>,

    /// Logs every http request
    #[clap(long)]
    log_http: bool,

    #[clap(long, default_value_t = 2)]
    http_workers: usize,

    /// How long a read waits on the address book before failing
    #[clap(long, default_value_t = 2000)]
    response_timeout_ms: u64,
}

fn read_seed(path: &Path) -> io::Result<Vec<PersonPayload>> {
    let contents = fs::read_to_string(path)?;

    serde_json::from_str(&contents).map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let args = Cli::parse();

    let public_url = args
        .public_url
        .clone()
        .unwrap_or_else(|| format!("http://localhost:{}", args.port));

    let seed = match &args.seed {
        Some(path) => read_seed(path)?,
        None => vec![],
    };

    let database_options = DatabaseOptions::default()
        .set_contacts_uri(ContactsUri::from_root(&public_url))
        .set_seed(seed)
        .set_response_timeout(Duration::from_millis(args.response_timeout_ms));

    let request_manager = Database::new(database_options).run()?;

    log::info!("starting HTTP server on {}:{}", args.address, args.port);

    let server_request_manager = request_manager.clone();
    let log_http = args.log_http;

    HttpServer::new(move || {
        App::new()
            .app_data(Data::new(ContactsResource::new(
                server_request_manager.clone(),
            )))
            .app_data(Data::new(PersonResource::new(server_request_manager.clone())))
            .configure(server::configure)
            .wrap(Cors::permissive())
            .wrap(Condition::new(log_http, middleware::Logger::default()))
    })
    .workers(args.http_workers)
    .bind((args.address, args.port))?
    .run()
    .await?;

    match request_manager.send_shutdown_request() {
        Ok(status) => log::info!("Shutting down server: {}", status),
        Err(err) => log::error!("Failed to shut down database: {}", err),
    }

    Ok(())
}
