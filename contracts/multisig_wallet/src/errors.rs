use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum MultisigError {
    NotInitialized = 0,
    AlreadyInitialized = 1,
    InvalidRequirement = 3,
    EmptyOwnerList = 4,
    DuplicateOwner = 5,
    OwnerNotFound = 6,
    RequirementExceedsOwners = 7,
    TooManyOwners = 8,
    NotOwner = 9,
    InvalidValue = 10,
    SelfCallOnly = 11,
    NotConfirmedByCaller = 12,
    TransactionNotFound = 13,
    AlreadyExecuted = 14,
    OwnerAlreadyExists = 15,
    AlreadyConfirmed = 16,
    ConfirmationNotFound = 17,
    ReentrantCall = 18,
    ValueTransferFailed = 19,
}

/// Broad classes callers can branch on without matching every code.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Validation,
    Authorization,
    NotFound,
    State,
}

impl MultisigError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            MultisigError::EmptyOwnerList
            | MultisigError::TooManyOwners
            | MultisigError::InvalidRequirement
            | MultisigError::RequirementExceedsOwners
            | MultisigError::DuplicateOwner
            | MultisigError::InvalidValue => ErrorKind::Validation,
            MultisigError::NotOwner
            | MultisigError::NotConfirmedByCaller
            | MultisigError::SelfCallOnly => ErrorKind::Authorization,
            MultisigError::TransactionNotFound => ErrorKind::NotFound,
            MultisigError::NotInitialized
            | MultisigError::AlreadyInitialized
            | MultisigError::AlreadyConfirmed
            | MultisigError::AlreadyExecuted
            | MultisigError::ConfirmationNotFound
            | MultisigError::OwnerAlreadyExists
            | MultisigError::OwnerNotFound
            | MultisigError::ReentrantCall
            | MultisigError::ValueTransferFailed => ErrorKind::State,
        }
    }
}
