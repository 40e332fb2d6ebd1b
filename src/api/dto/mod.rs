//! Request/response DTOs for the REST surface.
//!
//! Wire field names are camelCase to match the original UI contract;
//! database models stay snake_case and are mapped at this boundary.

pub mod participant_dto;
pub mod spin_dto;
pub mod winner_dto;

pub use participant_dto::ParticipantDto;
pub use spin_dto::{CancelSpinResponse, SpinResponse, WheelResponse};
pub use winner_dto::{
    SaveWinnerRequest, SaveWinnerResponse, TestWinnersResponse, WinnerDto, WinnerRecordDto,
};
