use cosmwasm_std::{OverflowError, StdError};
use cw_utils::PaymentError;
use mars_owner::OwnerError;
use thiserror::Error;

pub type ContractResult<T> = Result<T, ContractError>;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Owner(#[from] OwnerError),

    #[error("{0}")]
    Payment(#[from] PaymentError),

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    #[error("{reason}")]
    InsufficientPayment {
        reason: String,
    },

    #[error("{reason}")]
    InvalidInput {
        reason: String,
    },

    #[error("{reason}")]
    InvalidState {
        reason: String,
    },
}

impl ContractError {
    pub fn insufficient_payment(reason: impl Into<String>) -> Self {
        Self::InsufficientPayment {
            reason: reason.into(),
        }
    }

    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    pub fn invalid_state(reason: impl Into<String>) -> Self {
        Self::InvalidState {
            reason: reason.into(),
        }
    }

    pub fn invalid_post_id() -> Self {
        Self::invalid_input("Invalid post id")
    }
}
