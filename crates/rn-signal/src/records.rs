//! Already-parsed signal, controller and membership records.
//!
//! The road-description reader hands these over as plain rows;
//! [`SignalRecords::new`] checks them once so later stages can index freely.

use std::collections::BTreeMap;

use rn_core::{ControllerId, JunctionId, RoadDirection, RoadId, RoadKey, SignalId};

use crate::{SignalError, SignalResult};

/// Which form of a signal record a descriptor came from.  A signal has one
/// `Primary` descriptor and any number of `Reference` descriptors placing the
/// same signal on other roads.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SignalVariant {
    Primary,
    Reference,
}

/// A road-relative placement request for one signal.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SignalDescriptor {
    pub signal: SignalId,
    pub road: RoadId,
    /// Distance along the road reference line.
    pub s: f64,
    /// Signed lateral offset; negative is right of the reference line.
    pub t: f64,
    /// `"+"`, `"-"`, `"none"` or empty; does not affect placement.
    pub orientation: String,
    pub variant: SignalVariant,
}

impl SignalDescriptor {
    /// The road this descriptor targets, direction taken from the sign of `t`.
    pub fn road_key(&self) -> RoadKey {
        RoadKey::new(self.road, RoadDirection::from_lateral(self.t))
    }
}

/// One phase of a junction's signal program.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ControllerDescriptor {
    pub controller: ControllerId,
    pub junction: JunctionId,
    /// As given; may have gaps (`0, 1, 3`).
    pub sequence_original: u32,
    /// Contiguous `1..=N` within the junction; 0 until
    /// [`normalize_sequences`](crate::normalize_sequences) runs.
    pub sequence_normalized: u32,
}

impl ControllerDescriptor {
    pub fn new(controller: ControllerId, junction: JunctionId, sequence_original: u32) -> Self {
        Self { controller, junction, sequence_original, sequence_normalized: 0 }
    }
}

/// Validated signal input for one snapshot.
#[derive(Clone, Debug, Default)]
pub struct SignalRecords {
    descriptors: Vec<SignalDescriptor>,
    controllers: Vec<ControllerDescriptor>,
    members: BTreeMap<ControllerId, Vec<SignalId>>,
}

impl SignalRecords {
    /// Check and index the raw rows.
    ///
    /// Fails with [`SignalError::Parse`] on non-finite offsets,
    /// a repeated controller id, or a membership row naming an unknown
    /// controller.  The orientation token is kept as given.
    pub fn new(
        descriptors: Vec<SignalDescriptor>,
        controllers: Vec<ControllerDescriptor>,
        membership: Vec<(ControllerId, SignalId)>,
    ) -> SignalResult<Self> {
        for d in &descriptors {
            if !d.s.is_finite() || !d.t.is_finite() {
                return Err(SignalError::Parse(format!(
                    "{}: offsets must be finite (s={}, t={})",
                    d.signal, d.s, d.t
                )));
            }
        }

        let mut members: BTreeMap<ControllerId, Vec<SignalId>> = BTreeMap::new();
        for c in &controllers {
            if members.insert(c.controller, Vec::new()).is_some() {
                return Err(SignalError::Parse(format!("{} listed twice", c.controller)));
            }
        }
        for (controller, signal) in membership {
            let Some(list) = members.get_mut(&controller) else {
                return Err(SignalError::Parse(format!(
                    "membership row references unknown {controller}"
                )));
            };
            list.push(signal);
        }

        Ok(Self { descriptors, controllers, members })
    }

    pub fn descriptors(&self) -> &[SignalDescriptor] {
        &self.descriptors
    }

    pub fn controllers(&self) -> &[ControllerDescriptor] {
        &self.controllers
    }

    /// All descriptors of `signal`, in input order.
    pub fn descriptors_of(&self, signal: SignalId) -> impl Iterator<Item = &SignalDescriptor> + '_ {
        self.descriptors.iter().filter(move |d| d.signal == signal)
    }

    /// Signals governed by `controller`, in membership order.
    pub fn signals_of(&self, controller: ControllerId) -> &[SignalId] {
        self.members.get(&controller).map(Vec::as_slice).unwrap_or(&[])
    }
}
