//! Fixture builders for sample sources and gigs.

use crate::model::gig::Gig;
use crate::model::source::Source;
use chrono::{DateTime, Local};

/// `SeeTickets` at `https://www.seetickets.com`.
pub fn see_tickets() -> Source {
    Source::new("SeeTickets", "https://www.seetickets.com")
}

/// `TicketMaster` at `https://www.ticketmaster.com`.
pub fn ticket_master() -> Source {
    Source::new("TicketMaster", "https://www.ticketmaster.com")
}

/// `Ents24` at `https://www.ents24.com`.
pub fn ents24() -> Source {
    Source::new("Ents24", "https://www.ents24.com")
}

/// Fluent builder for unsaved `Source` fixtures.
#[derive(Debug, Clone)]
pub struct SourceBuilder {
    source: Source,
}

impl SourceBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            source: Source {
                name: name.into(),
                ..Source::default()
            },
        }
    }

    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.source.base_url = base_url.into();
        self
    }

    pub fn client_credentials(
        mut self,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        self.source.client_id = client_id.into();
        self.source.client_secret = client_secret.into();
        self
    }

    pub fn api_token(mut self, token: impl Into<String>, expires: DateTime<Local>) -> Self {
        self.source.api_token = token.into();
        self.source.token_expiry_date = Some(expires);
        self
    }

    pub fn build(self) -> Source {
        self.source
    }
}

/// Fluent builder for unsaved `Gig` fixtures.
#[derive(Debug, Clone)]
pub struct GigBuilder {
    gig: Gig,
}

impl GigBuilder {
    pub fn new(artist: impl Into<String>) -> Self {
        Self {
            gig: Gig {
                artist: artist.into(),
                ..Gig::default()
            },
        }
    }

    pub fn venue(mut self, venue: impl Into<String>) -> Self {
        self.gig.venue = venue.into();
        self
    }

    pub fn date(mut self, date: DateTime<Local>) -> Self {
        self.gig.date = Some(date);
        self
    }

    pub fn ticket_uri(mut self, ticket_uri: impl Into<String>) -> Self {
        self.gig.ticket_uri = ticket_uri.into();
        self
    }

    pub fn build(self) -> Gig {
        self.gig
    }
}

#[cfg(test)]
mod tests {
    use super::{see_tickets, GigBuilder, SourceBuilder};
    use chrono::Local;

    #[test]
    fn builders_fill_requested_fields_only() {
        let expires = Local::now();
        let source = SourceBuilder::new("Skiddle")
            .base_url("https://www.skiddle.com")
            .api_token("token", expires)
            .build();
        assert_eq!(source.name, "Skiddle");
        assert_eq!(source.token_expiry_date, Some(expires));
        assert!(source.client_id.is_empty());
        assert!(source.id.is_none());

        let gig = GigBuilder::new("Idles").venue("O2 Academy").build();
        assert_eq!(gig.venue, "O2 Academy");
        assert!(gig.date.is_none());
        assert!(gig.ticket_uri.is_empty());
    }

    #[test]
    fn sample_sources_are_unsaved() {
        assert!(see_tickets().id.is_none());
    }
}
