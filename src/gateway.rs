// JSON boundary for the search request mapper
// Binds the raw client payload, optionally validates it strictly, and maps it.

use thiserror::Error;
use tracing::{debug, warn};

use crate::mapper::{board_codes, convert_date, SearchRequestMapper};
use crate::search_request::HotelSearchRequest;
use crate::tracker::{TrackerIdGenerator, UuidTrackerIds};

#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    #[error("Validation failed with {} issue(s)", .0.len())]
    Validation(Vec<ValidationIssue>),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    #[error("Invalid {field}: {value:?} is not a YYYY-MM-DD date")]
    InvalidDate { field: &'static str, value: String },

    #[error("Invalid hotel code: {0:?}")]
    InvalidHotelCode(String),

    #[error("Unknown meal option: {0:?}")]
    UnknownMealCode(String),

    #[error("Room {room} declares {expected} children but lists {actual} ages")]
    ChildAgeMismatch {
        room: usize,
        expected: u32,
        actual: usize,
    },

    #[error("Room {room} holds {guests} guests, the limit is {max_guests}")]
    TooManyGuests {
        room: usize,
        guests: u64,
        max_guests: u32,
    },
}

// Collects every problem the lenient mapper would otherwise paper over
pub fn validate_request(
    request: &HotelSearchRequest,
    max_guests_per_room: u32,
) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    for (field, value) in [
        ("checkinDate", &request.checkin_date),
        ("checkoutDate", &request.checkout_date),
    ] {
        if convert_date(value).is_empty() {
            issues.push(ValidationIssue::InvalidDate {
                field,
                value: value.clone(),
            });
        }
    }

    if !request.hotel_code.is_empty() {
        for code in request.hotel_code.split(',') {
            if code.parse::<i64>().is_err() {
                issues.push(ValidationIssue::InvalidHotelCode(code.to_string()));
            }
        }
    }

    if !request.meal_options.is_empty() {
        for meal in request.meal_options.split(',') {
            if board_codes(meal).is_none() {
                issues.push(ValidationIssue::UnknownMealCode(meal.to_string()));
            }
        }
    }

    for (index, room) in request.search_rooms.iter().enumerate() {
        if room.child as usize != room.child_age.len() {
            issues.push(ValidationIssue::ChildAgeMismatch {
                room: index + 1,
                expected: room.child,
                actual: room.child_age.len(),
            });
        }

        let guests = u64::from(room.adult) + u64::from(room.child);
        if guests > u64::from(max_guests_per_room) {
            issues.push(ValidationIssue::TooManyGuests {
                room: index + 1,
                guests,
                max_guests: max_guests_per_room,
            });
        }
    }

    issues
}

pub struct SearchGateway<G = UuidTrackerIds> {
    mapper: SearchRequestMapper<G>,
    strict: bool,
}

impl SearchGateway {
    pub fn new() -> Self {
        Self::with_mapper(SearchRequestMapper::new())
    }

    pub fn strict() -> Self {
        Self::with_mapper(SearchRequestMapper::new()).with_strict_validation(true)
    }
}

impl Default for SearchGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: TrackerIdGenerator> SearchGateway<G> {
    pub fn with_mapper(mapper: SearchRequestMapper<G>) -> Self {
        Self {
            mapper,
            strict: false,
        }
    }

    pub fn with_strict_validation(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    // Parse the client payload into a search request
    pub fn bind(&self, payload: &str) -> Result<HotelSearchRequest, GatewayError> {
        serde_json::from_str(payload).map_err(|e| {
            warn!(error = %e, "rejecting malformed search payload");
            GatewayError::MalformedPayload(e.to_string())
        })
    }

    pub fn handle_request(&self, request: HotelSearchRequest) -> Result<String, GatewayError> {
        if self.strict {
            let issues = validate_request(&request, self.mapper.config().max_guests_per_room);
            if !issues.is_empty() {
                warn!(issues = issues.len(), "search request failed validation");
                return Err(GatewayError::Validation(issues));
            }
        }

        Ok(self.mapper.map_to_json(request))
    }

    pub fn handle(&self, payload: &str) -> Result<String, GatewayError> {
        let request = self.bind(payload)?;
        debug!(
            country = %request.country,
            rooms = request.search_rooms.len(),
            strict = self.strict,
            "handling hotel search"
        );
        self.handle_request(request)
    }
}
