//! Host-side helpers for working with a deployed factory.
//!
//! A transaction that calls `create_clone` reports the new clone in two
//! places: the instruction's return data and the `CounterCreated` event
//! (`Program data:`). [`recover_clone_address`] prefers the return value,
//! whether taken from transaction metadata or a `Program return:` log line,
//! and falls back to the event.

use std::str::FromStr;

use anchor_lang::prelude::*;
use anchor_lang::solana_program::pubkey::PUBKEY_BYTES;
use anchor_lang::Event;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::events::CounterCreated;
use crate::state::CounterFactory;

const PROGRAM_DATA: &str = "Program data: ";
const PROGRAM_RETURN: &str = "Program return: ";

/// Address of the factory `deployer` creates for `implementation`
pub fn factory_address(deployer: &Pubkey, implementation: &Pubkey) -> Pubkey {
    CounterFactory::derive_address(deployer, implementation).0
}

/// Address of the clone at registry position `index`
pub fn clone_address(implementation: &Pubkey, factory: &Pubkey, index: u64) -> Pubkey {
    counter::CounterAccount::derive_address(factory, index, implementation).0
}

#[derive(Debug, PartialEq)]
enum LogLine<'a> {
    Invoke(Pubkey),
    Exit(Pubkey),
    Data(&'a str),
    Return(Pubkey, &'a str),
    Other,
}

fn parse_line(line: &str) -> LogLine<'_> {
    if let Some(payload) = line.strip_prefix(PROGRAM_DATA) {
        return LogLine::Data(payload);
    }
    if let Some(rest) = line.strip_prefix(PROGRAM_RETURN) {
        return match rest.split_once(' ') {
            Some((program, payload)) => match Pubkey::from_str(program) {
                Ok(program) => LogLine::Return(program, payload),
                Err(_) => LogLine::Other,
            },
            None => LogLine::Other,
        };
    }

    let Some(rest) = line.strip_prefix("Program ") else {
        return LogLine::Other;
    };
    let Some((program, tail)) = rest.split_once(' ') else {
        return LogLine::Other;
    };
    let Ok(program) = Pubkey::from_str(program) else {
        return LogLine::Other;
    };

    if tail.starts_with("invoke [") {
        LogLine::Invoke(program)
    } else if tail == "success" || tail.starts_with("failed") {
        LogLine::Exit(program)
    } else {
        LogLine::Other
    }
}

/// Decode a value from recorded instruction return data
///
/// The runtime strips trailing zero bytes when it records return data, so the
/// bytes are zero-padded up to `len`, the value's largest encoded size, first.
pub fn decode_return_data<T: AnchorDeserialize>(data: &[u8], len: usize) -> Option<T> {
    let mut padded = data.to_vec();
    if padded.len() < len {
        padded.resize(len, 0);
    }
    T::deserialize(&mut padded.as_slice()).ok()
}

fn decode_event<E: Event>(payload: &str) -> Option<E> {
    // sol_log_data separates fields with spaces; events are a single field
    let field = payload.split(' ').next()?;
    let bytes = STANDARD.decode(field).ok()?;
    let body = bytes.strip_prefix(E::DISCRIMINATOR)?;
    E::try_from_slice(body).ok()
}

/// Every `CounterCreated` event emitted by `factory_program`, in log order
///
/// Only `Program data:` lines written while `factory_program` is the executing
/// frame count, so look-alike events from other programs are ignored.
pub fn counter_created_events<I, S>(logs: I, factory_program: &Pubkey) -> Vec<CounterCreated>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut frames: Vec<Pubkey> = Vec::new();
    let mut events = Vec::new();

    for line in logs {
        match parse_line(line.as_ref()) {
            LogLine::Invoke(program) => frames.push(program),
            LogLine::Exit(_) => {
                frames.pop();
            }
            LogLine::Data(payload) if frames.last() == Some(factory_program) => {
                if let Some(event) = decode_event::<CounterCreated>(payload) {
                    events.push(event);
                }
            }
            _ => {}
        }
    }

    events
}

/// First `CounterCreated` event emitted by `factory_program`
pub fn parse_counter_created<I, S>(logs: I, factory_program: &Pubkey) -> Option<CounterCreated>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    counter_created_events(logs, factory_program).into_iter().next()
}

/// Pubkey returned by `factory_program`, if its return data decodes as one
pub fn parse_return_pubkey<I, S>(logs: I, factory_program: &Pubkey) -> Option<Pubkey>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    logs.into_iter().find_map(|line| match parse_line(line.as_ref()) {
        LogLine::Return(program, payload) if program == *factory_program => {
            let bytes = STANDARD.decode(payload).ok()?;
            decode_return_data(&bytes, PUBKEY_BYTES)
        }
        _ => None,
    })
}

/// Address of the clone created by a `create_clone` transaction
///
/// `return_data` is the `(program, data)` pair from the transaction metadata,
/// when the RPC reports it.
pub fn recover_clone_address<S: AsRef<str>>(
    return_data: Option<(&Pubkey, &[u8])>,
    logs: &[S],
    factory_program: &Pubkey,
) -> Option<Pubkey> {
    return_data
        .filter(|(program, _)| *program == factory_program)
        .and_then(|(_, data)| decode_return_data(data, PUBKEY_BYTES))
        .or_else(|| parse_return_pubkey(logs, factory_program))
        .or_else(|| parse_counter_created(logs, factory_program).map(|event| event.counter))
}
