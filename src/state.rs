use crate::Error;

/// Where a reader or writer is within the packet, flow set cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum State {
    AwaitingPacketHeader,
    AwaitingFlowSet,
}

impl State {
    fn as_str(&self) -> &'static str {
        match self {
            State::AwaitingPacketHeader => "packet header",
            State::AwaitingFlowSet => "flow set",
        }
    }
}

/// What remains of the packet announced by the last header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Budget {
    /// Number of flow sets (or records, for NetFlow v5) still expected.
    Count(usize),
    /// Number of payload bytes still expected.
    Bytes(usize),
}

impl Budget {
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        matches!(self, Budget::Count(0) | Budget::Bytes(0))
    }
}

/// Enforces `header, flow set*, header, ...` ordering.
#[derive(Debug)]
pub struct Sequencer {
    state: State,
    budget: Budget,
}

impl Default for Sequencer {
    fn default() -> Self {
        Sequencer {
            state: State::AwaitingPacketHeader,
            budget: Budget::Count(0),
        }
    }
}

impl Sequencer {
    #[inline]
    pub fn state(&self) -> State {
        self.state
    }

    #[inline]
    pub fn budget(&self) -> Budget {
        self.budget
    }

    fn require(&self, requested: State) -> Result<(), Error> {
        if self.state != requested {
            return Err(Error::ProtocolSequence {
                expected: self.state.as_str(),
                got: requested.as_str(),
            });
        }

        Ok(())
    }

    /// Fails unless a packet header is expected now.
    pub fn expect_packet_header(&self) -> Result<(), Error> {
        self.require(State::AwaitingPacketHeader)
    }

    /// A packet header was read or written, flow sets follow until `budget`
    /// is used up. An empty packet goes straight back to awaiting a header.
    pub fn begin_packet(&mut self, budget: Budget) -> Result<(), Error> {
        self.expect_packet_header()?;

        self.budget = budget;
        if !budget.is_exhausted() {
            self.state = State::AwaitingFlowSet;
        }

        trace!(message = "packet started", ?budget);

        Ok(())
    }

    /// Fails unless a flow set is expected now.
    pub fn expect_flow_set(&self) -> Result<(), Error> {
        self.require(State::AwaitingFlowSet)
    }

    /// Fails unless a flow set of `size` bytes fits the remaining budget.
    pub fn check(&self, size: usize) -> Result<(), Error> {
        self.expect_flow_set()?;

        if let Budget::Bytes(remaining) = self.budget {
            if size > remaining {
                return Err(Error::BudgetExceeded {
                    needed: size,
                    remaining,
                });
            }
        }

        Ok(())
    }

    /// Account for one flow set of `size` bytes.
    pub fn consume(&mut self, size: usize) -> Result<(), Error> {
        self.check(size)?;

        self.budget = match self.budget {
            Budget::Count(remaining) => Budget::Count(remaining - 1),
            Budget::Bytes(remaining) => Budget::Bytes(remaining - size),
        };

        if self.budget.is_exhausted() {
            self.state = State::AwaitingPacketHeader;
            trace!(message = "packet finished");
        }

        Ok(())
    }

    /// Give up on the current packet, the next call must be a header.
    pub fn reset(&mut self) {
        self.state = State::AwaitingPacketHeader;
        self.budget = Budget::Count(0);
    }
}
