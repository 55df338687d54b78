//! Club clients

use crate::types::{ClientName, ClientState, TableId};

/// A client currently inside the club
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Client {
    /// Client name, unique among clients in the club
    pub name: ClientName,
    /// Where the client is
    pub state: ClientState,
}

impl Client {
    /// A client who just walked in
    pub fn new(name: ClientName) -> Self {
        Self { name, state: ClientState::Arrived }
    }

    /// Table the client occupies, if any
    pub fn busy_table(&self) -> Option<TableId> {
        self.state.busy_table()
    }

    /// Check if the client sits at a table
    pub fn is_seated(&self) -> bool {
        self.busy_table().is_some()
    }

    /// Check if the client stands in the queue
    pub fn is_waiting(&self) -> bool {
        self.state == ClientState::Waiting
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_lifecycle_states() {
        let mut client = Client::new("alice".into());
        assert_eq!(client.state, ClientState::Arrived);
        assert!(!client.is_seated());
        assert!(!client.is_waiting());

        client.state = ClientState::Waiting;
        assert!(client.is_waiting());

        client.state = ClientState::Seated(TableId::new(2));
        assert!(client.is_seated());
        assert_eq!(client.busy_table(), Some(TableId::new(2)));
    }
}
