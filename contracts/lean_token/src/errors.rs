use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum LeanTokenError {
    AlreadyInitialized = 400,
    NotInitialized = 401,
    InsufficientBalance = 402,
    LengthMismatch = 403,
    NegativeAmount = 404,
    BatchTooLarge = 405,
    Overflow = 406,
}
