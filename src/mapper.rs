// Search request mapping
// Rewrites a client hotel search into the supplier availability request format.
// Every malformed sub-field degrades to an empty value, the mapper itself never fails.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, error, warn};

use crate::config::{ChildAgePolicy, MapperConfig};
use crate::search_request::{HotelSearchRequest, SearchRoom};
use crate::supplier::{
    AvailabilityRequest, Boards, CommonResp, Filter, Occupancy, Pax, Stay, SupplierHotels,
};
use crate::tracker::{TrackerIdGenerator, UuidTrackerIds};

pub const PLATFORM_TAG: &str = "GATEWAY";
pub const PAYMENT_TYPE: &str = "AT_WEB";
const DATE_FORMAT: &str = "%Y-%m-%d";

const ROOM_ONLY: &[&str] = &["RO"];
const BED_AND_BREAKFAST: &[&str] = &[
    "B1", "AB", "B2", "CB", "BB", "BF", "EB", "IB", "LB", "QB", "SB",
];
const HALF_BOARD: &[&str] = &["HB", "HR", "FS", "HL", "HS", "HV"];
const FULL_BOARD: &[&str] = &["FB", "FE", "FL", "FR", "FS", "FV"];
const ALL_INCLUSIVE: &[&str] = &["AI", "AS", "AA"];

// Meal option code to supplier board codes
pub fn board_codes(meal_code: &str) -> Option<&'static [&'static str]> {
    match meal_code {
        "1" => Some(ROOM_ONLY),
        "2" => Some(BED_AND_BREAKFAST),
        "3" => Some(HALF_BOARD),
        "4" => Some(FULL_BOARD),
        "5" => Some(ALL_INCLUSIVE),
        _ => None,
    }
}

// Validates a YYYY-MM-DD date and returns it unchanged, or an empty string
// when it is not a real calendar date in exactly that format
pub fn convert_date(date: &str) -> String {
    match NaiveDate::parse_from_str(date, DATE_FORMAT) {
        Ok(parsed) => {
            let formatted = parsed.format(DATE_FORMAT).to_string();
            // chrono accepts unpadded fields, the wire format does not
            if formatted == date {
                formatted
            } else {
                debug!(date, "date is not zero padded, dropping it");
                String::new()
            }
        }
        Err(e) => {
            debug!(date, error = %e, "unparseable date, dropping it");
            String::new()
        }
    }
}

// Comma separated hotel codes to ids, skipping anything that isn't an integer
pub fn parse_hotel_codes(codes: &str) -> Vec<i64> {
    codes
        .split(',')
        .filter_map(|code| match code.parse::<i64>() {
            Ok(id) => Some(id),
            Err(_) => {
                if !code.is_empty() {
                    debug!(code, "skipping non-numeric hotel code");
                }
                None
            }
        })
        .collect()
}

pub fn build_filter(cheapest_room_only: bool, room_count: usize) -> Filter {
    let mut filter = Filter {
        payment_type: PAYMENT_TYPE.to_string(),
        ..Default::default()
    };
    if cheapest_room_only {
        // Zero rooms would read as a zero limit, leave it unset instead
        filter.max_rooms = (room_count > 0).then_some(room_count);
        filter.max_rates_per_room = Some(1);
    }
    filter
}

pub fn meals_added(meals: &str) -> Boards {
    let mut board = Vec::new();
    for meal in meals.split(',') {
        match board_codes(meal) {
            Some(codes) => board.extend(codes.iter().map(|code| code.to_string())),
            None => debug!(meal, "skipping unknown meal option"),
        }
    }

    Boards {
        board,
        included: true,
    }
}

pub fn stamp_tracker_id(rooms: &mut [SearchRoom], tracker_id: &str) {
    for room in rooms.iter_mut() {
        room.tracker_id = tracker_id.to_string();
    }
}

// Builds the occupancy for one room: an AD pax per adult followed by a
// CH pax per child, ages taken positionally from the room's age list.
// Guests beyond max_guests_per_room are dropped, children before adults.
pub fn create_occupancy(room: &SearchRoom, index: u32, config: &MapperConfig) -> Occupancy {
    let known_ages = room.child_age.len();
    let policy = config.child_age_policy;
    if (room.child as usize) > known_ages {
        warn!(
            room = index,
            children = room.child,
            ages = known_ages,
            ?policy,
            "room lists fewer child ages than children"
        );
    }

    let children = match policy {
        ChildAgePolicy::FillWith(_) => room.child,
        ChildAgePolicy::Truncate => room.child.min(known_ages as u32),
    };

    let max_guests = config.max_guests_per_room;
    let adults = room.adult.min(max_guests);
    let children = children.min(max_guests - adults);
    if room.adult.saturating_add(room.child) > max_guests {
        warn!(
            room = index,
            adults = room.adult,
            children = room.child,
            max_guests,
            "room exceeds guest limit, clamping"
        );
    }

    let mut paxes = Vec::with_capacity(adults as usize + children as usize);
    paxes.extend((0..adults).map(|_| Pax::adult()));
    paxes.extend((0..children as usize).map(|i| {
        let age = match policy {
            ChildAgePolicy::FillWith(default_age) => {
                room.child_age.get(i).copied().unwrap_or(default_age)
            }
            ChildAgePolicy::Truncate => room.child_age[i],
        };
        Pax::child(age)
    }));

    Occupancy {
        rooms: index,
        adults,
        children,
        paxes,
    }
}

// One occupancy per room, numbered from 1 in request order
pub fn create_occupancies(rooms: &[SearchRoom], config: &MapperConfig) -> Vec<Occupancy> {
    rooms
        .iter()
        .zip(1u32..)
        .map(|(room, index)| create_occupancy(room, index, config))
        .collect()
}

fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|e| {
        error!(error = %e, "failed to serialize mapped request");
        String::new()
    })
}

pub struct SearchRequestMapper<G = UuidTrackerIds> {
    config: MapperConfig,
    tracker_ids: G,
}

impl SearchRequestMapper {
    pub fn new() -> Self {
        Self::with_generator(MapperConfig::default(), UuidTrackerIds)
    }

    pub fn with_config(config: MapperConfig) -> Self {
        Self::with_generator(config, UuidTrackerIds)
    }
}

impl Default for SearchRequestMapper {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: TrackerIdGenerator> SearchRequestMapper<G> {
    pub fn with_generator(config: MapperConfig, tracker_ids: G) -> Self {
        Self {
            config,
            tracker_ids,
        }
    }

    pub fn config(&self) -> &MapperConfig {
        &self.config
    }

    // Builds the supplier request and the tracker-stamped room list
    pub fn build(&self, request: HotelSearchRequest) -> (AvailabilityRequest, Vec<SearchRoom>) {
        let HotelSearchRequest {
            country,
            checkin_date,
            checkout_date,
            mut search_rooms,
            hotel_code,
            meal_options,
            tracker_id,
            cheapest_room_only,
            ..
        } = request;

        let tracker_id = if tracker_id.is_empty() {
            let generated = self.tracker_ids.generate();
            debug!(tracker_id = %generated, "no tracker id supplied, generated one");
            generated
        } else {
            tracker_id
        };

        // Stamp before building occupancies so both outputs see the same rooms
        stamp_tracker_id(&mut search_rooms, &tracker_id);

        let boards = if meal_options.is_empty() {
            None
        } else {
            Some(meals_added(&meal_options))
        };

        let availability = AvailabilityRequest {
            stay: Stay {
                check_in: convert_date(&checkin_date),
                check_out: convert_date(&checkout_date),
            },
            occupancies: create_occupancies(&search_rooms, &self.config),
            hotels: SupplierHotels {
                hotel: parse_hotel_codes(&hotel_code),
            },
            filter: build_filter(cheapest_room_only, search_rooms.len()),
            daily_rate: true,
            platform: PLATFORM_TAG.to_string(),
            source_market: country,
            boards,
        };

        (availability, search_rooms)
    }

    pub fn map(&self, request: HotelSearchRequest) -> CommonResp {
        let (availability, rooms) = self.build(request);
        debug!(
            hotels = availability.hotels.hotel.len(),
            rooms = rooms.len(),
            "mapped hotel search request"
        );

        CommonResp {
            supplier_request: to_json(&availability),
            room_info: to_json(&rooms),
        }
    }

    pub fn map_to_json(&self, request: HotelSearchRequest) -> String {
        to_json(&self.map(request))
    }
}
