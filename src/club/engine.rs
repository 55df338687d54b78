//! Club engine
//!
//! This module contains the state machine that replays a working day: it owns
//! every client, table and the waiting queue, applies the club rules to each
//! incoming event and writes the report as it goes.

use chrono::NaiveTime;
use std::collections::HashMap;
use tracing::{debug, info, instrument, warn};

use crate::types::{
    ClientName, ClientState, ClubConfig, IncomingEventKind, OutgoingEventKind, TableId,
};

use super::{
    Client, ClientAction, ClientQueue, ClubError, ClubResult, IncomingEvent, ReportBuilder, Table,
};

/// State machine for one club day
///
/// Lifecycle: [`open`](Self::open), any number of `process_*` calls in
/// non-decreasing time order, [`close`](Self::close), then
/// [`report`](Self::report). Every incoming event is written to the report
/// before it is checked, so rejected events show up followed by their error.
#[derive(Debug)]
pub struct ClubEngine {
    config: ClubConfig,
    clients: HashMap<ClientName, Client>,
    /// Dense list, `tables[i].id == i + 1`
    tables: Vec<Table>,
    queue: ClientQueue,
    report: ReportBuilder,
    promotions: usize,
    closed: bool,
}

impl ClubEngine {
    /// Create a club with all tables free and nobody inside
    pub fn new(config: ClubConfig) -> Self {
        let tables = config.table_ids().map(Table::new).collect();
        let queue = ClientQueue::new(config.queue_capacity());

        Self {
            config,
            clients: HashMap::new(),
            tables,
            queue,
            report: ReportBuilder::new(),
            promotions: 0,
            closed: false,
        }
    }

    /// Open the club: the report starts with the opening time
    pub fn open(&mut self) {
        info!(
            tables = self.config.tables_count,
            price_per_hour = self.config.price_per_hour,
            "Opening club at {}",
            self.config.opening_time.format("%H:%M")
        );
        self.report.write_time(self.config.opening_time);
    }

    /// Dispatch an incoming event to its handler
    pub fn process(&mut self, event: &IncomingEvent) -> ClubResult<()> {
        match event.action {
            ClientAction::Arrived => self.process_arrived(event.time, &event.client),
            ClientAction::TookPlace(table) => {
                self.process_took_place(event.time, &event.client, table)
            }
            ClientAction::Waiting => self.process_waiting(event.time, &event.client),
            ClientAction::Left => self.process_left(event.time, &event.client),
        }
    }

    /// A client walks in
    pub fn process_arrived(&mut self, time: NaiveTime, name: &ClientName) -> ClubResult<()> {
        self.report.write_event(time, IncomingEventKind::Arrived.code(), name);

        if self.clients.contains_key(name) {
            return self.reject(time, name, ClubError::AlreadyInClub);
        }

        if !self.config.is_working_hours(time) {
            return self.reject(time, name, ClubError::NotOpenYet);
        }

        self.clients.insert(name.clone(), Client::new(name.clone()));
        debug!(client = %name, "Client arrived");
        Ok(())
    }

    /// A client sits down at `table`, possibly moving from another table
    pub fn process_took_place(
        &mut self,
        time: NaiveTime,
        name: &ClientName,
        table: TableId,
    ) -> ClubResult<()> {
        self.report
            .write_event_with_table(time, IncomingEventKind::TookPlace.code(), name, table);

        match self.table(table).map(Table::is_busy) {
            None => return self.reject(time, name, ClubError::UnknownTable),
            Some(true) => return self.reject(time, name, ClubError::TableBusy),
            Some(false) => {}
        }

        let Some(previous) = self.clients.get(name).map(|client| client.state) else {
            return self.reject(time, name, ClubError::UnknownClient);
        };

        match previous {
            ClientState::Seated(old_table) => {
                debug!(client = %name, from = %old_table, to = %table, "Client changes table");
                self.release_table(old_table, time);
            }
            ClientState::Waiting => {
                self.queue.remove(name);
            }
            ClientState::Arrived => {}
        }

        self.seat(name, table, time);
        debug!(client = %name, table = %table, "Client took place");
        Ok(())
    }

    /// A client asks to wait for a table
    pub fn process_waiting(&mut self, time: NaiveTime, name: &ClientName) -> ClubResult<()> {
        self.report.write_event(time, IncomingEventKind::Waiting.code(), name);

        // A free table rules out waiting, whoever asks
        if self.has_free_table() {
            return self.reject(time, name, ClubError::CannotWaitNow);
        }

        let Some(state) = self.clients.get(name).map(|client| client.state) else {
            return self.reject(time, name, ClubError::UnknownClient);
        };

        // Already has a table or already queued: nothing changes
        if matches!(state, ClientState::Seated(_) | ClientState::Waiting) {
            return Ok(());
        }

        if self.queue.is_full() {
            self.clients.remove(name);
            self.report.write_event(time, OutgoingEventKind::Left.code(), name);
            debug!(
                client = %name,
                capacity = self.queue.capacity(),
                "Queue is full, client sent home"
            );
            return Err(ClubError::QueueFull);
        }

        self.queue.push(name.clone());
        if let Some(client) = self.clients.get_mut(name) {
            client.state = ClientState::Waiting;
        }
        debug!(client = %name, position = self.queue.len(), "Client is waiting");
        Ok(())
    }

    /// A client goes home
    pub fn process_left(&mut self, time: NaiveTime, name: &ClientName) -> ClubResult<()> {
        self.report.write_event(time, IncomingEventKind::Left.code(), name);

        let Some(client) = self.clients.remove(name) else {
            return self.reject(time, name, ClubError::UnknownClient);
        };

        match client.state {
            ClientState::Seated(table) => self.release_table(table, time),
            ClientState::Waiting => {
                self.queue.remove(name);
            }
            ClientState::Arrived => {}
        }

        debug!(client = %name, "Client left");
        Ok(())
    }

    /// Close the club: send everybody home, bill their tables, write the summary
    #[instrument(skip(self), fields(remaining = self.clients.len()))]
    pub fn close(&mut self) {
        if self.closed {
            warn!("Club is already closed, ignoring repeated close");
            return;
        }
        self.closed = true;

        let closing_time = self.config.closing_time;
        let price_per_hour = self.config.price_per_hour;

        let mut names: Vec<ClientName> = self.clients.keys().cloned().collect();
        names.sort();

        for name in names {
            self.report.write_event(closing_time, OutgoingEventKind::Left.code(), &name);
            let busy_table = self
                .clients
                .remove(&name)
                .and_then(|client| client.busy_table())
                .and_then(TableId::index);
            if let Some(table) = busy_table.and_then(|i| self.tables.get_mut(i)) {
                table.free(closing_time, price_per_hour);
            }
        }
        self.queue.clear();

        self.report.write_time(closing_time);
        for table in &self.tables {
            self.report.write_table_summary(table.id, table.profit(), table.usage_time());
        }

        info!(
            total_profit = self.total_profit(),
            report_lines = self.report.len(),
            "Club closed at {}",
            closing_time.format("%H:%M")
        );
    }

    /// The report text accumulated so far
    pub fn report(&self) -> String {
        self.report.render()
    }

    /// The report lines accumulated so far
    pub fn report_lines(&self) -> &[String] {
        self.report.lines()
    }

    /// Club configuration
    pub fn config(&self) -> &ClubConfig {
        &self.config
    }

    /// All tables in ascending id order
    pub fn tables(&self) -> &[Table] {
        &self.tables
    }

    /// Look up a table by id
    pub fn table(&self, id: TableId) -> Option<&Table> {
        id.index().and_then(|i| self.tables.get(i))
    }

    /// Look up a client who is inside the club
    pub fn client(&self, name: &str) -> Option<&Client> {
        self.clients.get(name)
    }

    /// Number of clients inside the club
    pub fn client_count(&self) -> usize {
        self.clients.len()
    }

    /// Number of clients in the waiting queue
    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    /// How many queued clients were seated at a freed table
    pub fn promotion_count(&self) -> usize {
        self.promotions
    }

    /// Sum of the profit of all tables
    pub fn total_profit(&self) -> u64 {
        self.tables.iter().map(Table::profit).fold(0, u64::saturating_add)
    }

    /// Check if `close` has run
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    fn reject(&mut self, time: NaiveTime, name: &ClientName, error: ClubError) -> ClubResult<()> {
        self.report.write_error(time, error);
        debug!(client = %name, reason = error.kind_name(), "Event rejected");
        Err(error)
    }

    fn has_free_table(&self) -> bool {
        self.tables.iter().any(Table::is_free)
    }

    fn seat(&mut self, name: &ClientName, table: TableId, time: NaiveTime) {
        if let Some(target) = table.index().and_then(|i| self.tables.get_mut(i)) {
            target.take(time);
        }
        if let Some(client) = self.clients.get_mut(name) {
            client.state = ClientState::Seated(table);
        }
    }

    /// Free `table` and hand it to the longest-waiting client, if any
    fn release_table(&mut self, table: TableId, time: NaiveTime) {
        let price_per_hour = self.config.price_per_hour;
        if let Some(freed) = table.index().and_then(|i| self.tables.get_mut(i)) {
            freed.free(time, price_per_hour);
        }

        let Some(next) = self.queue.pop() else {
            return;
        };

        self.seat(&next, table, time);
        self.report
            .write_event_with_table(time, OutgoingEventKind::TookPlace.code(), &next, table);
        self.promotions += 1;
        debug!(client = %next, table = %table, "Waiting client seated");
    }
}
