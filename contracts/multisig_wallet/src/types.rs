use soroban_sdk::{contracttype, Address, Symbol, Val, Vec};

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Initialized,
    Owners,
    Required,
    Token,
    TransactionCount,
    // Running count of executed transactions.
    ExecutedCount,
    // Set while an external dispatch is in flight.
    Dispatching,
    // Id of the self-targeted transaction currently being dispatched.
    SelfDispatch,
    Transaction(u64),
    Confirmations(u64),
}

/// A contract function invocation carried by a transaction.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Call {
    pub function: Symbol,
    pub args: Vec<Val>,
}

impl Call {
    pub fn new(function: Symbol, args: Vec<Val>) -> Self {
        Self { function, args }
    }
}

/// What a transaction does at its destination besides moving value.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Payload {
    /// Plain value transfer.
    None,
    Call(Call),
}

impl Payload {
    pub fn call(&self) -> Option<&Call> {
        match self {
            Payload::None => None,
            Payload::Call(call) => Some(call),
        }
    }
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Transaction {
    pub id: u64,
    pub destination: Address,
    /// Amount of the value token released to `destination`.
    pub value: i128,
    pub payload: Payload,
    pub executed: bool,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Confirmation {
    pub owner: Address,
    pub confirmed_at: u64,
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FailureReason {
    /// The wallet holds less of the value token than the transaction moves.
    InsufficientBalance,
    TransferFailed,
    CallFailed,
    /// Self-targeted payload that names no governance operation, or whose
    /// arguments do not decode.
    UnsupportedCall,
    /// A governance operation refused its arguments; carries the error code.
    GovernanceRejected(u32),
}

/// Result of a quorum check that may have dispatched a transaction.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ExecutionOutcome {
    NotReady,
    Executed,
    Failed(FailureReason),
}
