/// ----- NETWORK MODULE -----
/// This module talks to the remote elevator authority. It opens a session,
/// polls a snapshot every cycle, hands it to the dispatch thread and posts
/// the commands it gets back. The first failure ends the session.

use crossbeam_channel::{Receiver, Sender};
use log::{error, info};
use reqwest::blocking::{Client as HttpClient, RequestBuilder, Response};
use reqwest::Method;

use shared_resources::command::{ActionRequest, Command};
use shared_resources::config::{ServerConfig, SessionConfig};
use shared_resources::snapshot::{SessionStart, Snapshot};

use crate::utilities::error::DispatchError;

const AUTH_HEADER: &str = "X-Auth-Token";

pub struct Client {
    http: HttpClient,
    base_url: String,
    user_key: String,
    token: Option<String>,
}

impl Client {
    pub fn new(server: &ServerConfig) -> Result<Self, DispatchError> {
        Ok(Client {
            http: HttpClient::builder().build()?,
            base_url: server.url.trim_end_matches('/').to_string(),
            user_key: server.user_key.clone(),
            token: None,
        })
    }

    pub fn start(&mut self, session: &SessionConfig) -> Result<SessionStart, DispatchError> {
        let path = format!("/start/{}/{}/{}", self.user_key, session.problem, session.elevator_count);
        let response = self.request(Method::POST, &path).send()?;
        let start: SessionStart = check(response, &path)?.json()?;
        self.token = Some(start.token.clone());
        Ok(start)
    }

    pub fn on_calls(&self) -> Result<Snapshot, DispatchError> {
        let path = "/oncalls";
        let response = self.request(Method::GET, path).send()?;
        Ok(check(response, path)?.json()?)
    }

    pub fn action(&self, commands: Vec<Command>) -> Result<(), DispatchError> {
        let path = "/action";
        let response = self.request(Method::POST, path)
            .json(&ActionRequest { commands: commands })
            .send()?;
        check(response, path)?;
        Ok(())
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let request = self.http.request(method, format!("{}{}", self.base_url, path));
        match &self.token {
            Some(token) => request.header(AUTH_HEADER, token),
            None => request,
        }
    }
}

fn check(response: Response, path: &str) -> Result<Response, DispatchError> {
    if response.status().is_success() {
        Ok(response)
    } else {
        Err(DispatchError::Http {
            status: response.status().as_u16(),
            path: path.to_string(),
        })
    }
}

pub fn main(
    client: Client,
    snapshot_tx: Sender<Snapshot>,
    commands_rx: Receiver<Vec<Command>>,
) {
    match exchange(&client, &snapshot_tx, &commands_rx) {
        Ok(()) => info!("authority reported end of session"),
        Err(e) => error!("stopping network loop: {}", e),
    }
}

fn exchange(
    client: &Client,
    snapshot_tx: &Sender<Snapshot>,
    commands_rx: &Receiver<Vec<Command>>,
) -> Result<(), DispatchError> {
    loop {
        let snapshot = client.on_calls()?;
        if snapshot.is_end {
            return Ok(());
        }
        snapshot_tx.send(snapshot).map_err(|_| DispatchError::Channel)?;
        let commands = commands_rx.recv().map_err(|_| DispatchError::Channel)?;
        client.action(commands)?;
    }
}
