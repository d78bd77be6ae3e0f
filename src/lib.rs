// Hotel search gateway: maps client hotel searches onto the supplier availability format

pub mod config;
pub mod gateway;
pub mod mapper;
pub mod search_request;
pub mod supplier;
pub mod tracker;

// Re-export key types for convenience
pub use config::{ChildAgePolicy, MapperConfig};
pub use gateway::{validate_request, GatewayError, SearchGateway, ValidationIssue};
pub use mapper::{SearchRequestMapper, PAYMENT_TYPE, PLATFORM_TAG};
pub use search_request::{HotelSearchRequest, SearchRoom};
pub use supplier::{
    AvailabilityRequest, Boards, CommonResp, Filter, Occupancy, Pax, PaxType, Stay,
    SupplierHotels,
};
pub use tracker::{FixedTrackerId, TrackerIdGenerator, UuidTrackerIds};
