use std::{io, thread, time::Instant};

use flume::Receiver;
use num_format::{Locale, ToFormattedString};

use crate::model::action::{Action, ActionResult};

use super::{
    options::DatabaseOptions,
    request_manager::{
        DatabaseRequest, DatabaseRequestAction, DatabaseResponseAction, RequestManager,
    },
    table::table::PersonTable,
};

/// Owns the address book. All reads and writes are applied one at a time on the database thread,
/// which is what keeps the person list and the id sequence consistent under concurrent requests.
pub struct Database {
    person_table: PersonTable,
    database_options: DatabaseOptions,
}

impl Database {
    pub fn new(options: DatabaseOptions) -> Self {
        Self {
            person_table: PersonTable::new(options.contacts_uri.clone()),
            database_options: options,
        }
    }

    /// Seeds the table, then moves the database onto its own thread. The returned request manager
    /// is the only way to reach it.
    pub fn run(mut self) -> io::Result<RequestManager> {
        let (database_sender, database_receiver) = flume::unbounded::<DatabaseRequest>();

        let request_manager =
            RequestManager::new(database_sender, self.database_options.response_timeout);

        self.seed();

        thread::Builder::new()
            .name("addressbook-database".to_string())
            .spawn(move || self.process_requests(database_receiver))?;

        Ok(request_manager)
    }

    fn seed(&mut self) {
        let now = Instant::now();

        let seed = std::mem::take(&mut self.database_options.seed);

        for payload in seed {
            // Create cannot be rejected
            let _ = self.process_action(Action::Create(payload));
        }

        log::info!(
            "✅ Address book ready [Duration: {}ms]",
            now.elapsed().as_millis(),
        );

        log::info!(
            "📀 Data               [Contacts: {}, NextId: {}, Base: {}]",
            self.person_table.len().to_formatted_string(&Locale::en),
            self.person_table.next_id(),
            self.database_options.contacts_uri
        );
    }

    fn process_requests(mut self, database_receiver: Receiver<DatabaseRequest>) {
        loop {
            // Ends once every request manager has been dropped
            let Ok(DatabaseRequest {
                action,
                response_sender,
            }) = database_receiver.recv()
            else {
                log::info!("All request managers dropped, stopping database");
                return;
            };

            log::debug!("Received request: {}", action.log_format());

            // A read that timed out is not worth answering
            if response_sender.is_closed() {
                log::warn!("Caller stopped waiting, skipped: {}", action.log_format());
                continue;
            }

            let action = match action {
                DatabaseRequestAction::Request(action) => action,
                DatabaseRequestAction::Shutdown => {
                    log::info!("Shutting down database");

                    // Requests queued behind the shutdown are dropped, their callers see a
                    //  disconnect. The receiver is gone before the caller hears back.
                    database_receiver.drain().for_each(drop);
                    drop(database_receiver);

                    let _ = response_sender.send(DatabaseResponseAction::Response(
                        ActionResult::SuccessStatus("Successfully shutdown database".to_string()),
                    ));

                    return;
                }
            };

            let action_response = self.process_action(action);

            // Only reads can time out, a mutation caller is always still waiting here
            if response_sender.send(action_response).is_err() {
                log::warn!("Caller stopped waiting before the response was sent");
            }
        }
    }

    pub fn process_action(&mut self, action: Action) -> DatabaseResponseAction {
        let is_mutation = action.is_mutation();

        match self.person_table.apply(action) {
            Ok(action_result) => {
                if is_mutation {
                    log::info!(
                        "✅ Committed: [Contacts: {}, NextId: {}]",
                        self.person_table.len(),
                        self.person_table.next_id()
                    );
                }

                DatabaseResponseAction::Response(action_result)
            }
            Err(err) => {
                if is_mutation {
                    log::warn!("⚠️  Rejected: {}", err);
                } else {
                    log::debug!("{}", err);
                }

                DatabaseResponseAction::Rejected(err)
            }
        }
    }
}
