// src/camera/tour.rs

use super::path::{CameraPathPlanner, CameraState};
use crate::atlas::SelectedLocation;
use crate::config::TourConfig;
use crate::math::types::*;
use bevy::log::debug;
use std::collections::VecDeque;

/// Ein Tour-Halt; ohne Anker wird der Halt übersprungen
#[derive(Debug, Clone, PartialEq)]
pub struct TourStop {
    pub location: SelectedLocation,
    pub anchor: Option<Point3D>,
}

impl TourStop {
    pub fn new(location: SelectedLocation, anchor: Option<Point3D>) -> Self {
        Self { location, anchor }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TourPhase {
    Idle,
    Animating { generation: u64 },
}

#[derive(Debug, Clone, PartialEq)]
pub enum TourEvent {
    /// Neue Keyframe-Folge für den Halt `index`
    StepPlanned {
        index: usize,
        generation: u64,
        keyframes: usize,
    },
    /// Halt ohne Anker, weiter zum nächsten
    Skipped { index: usize },
}

/// Keyframe samt Generation, mit der er abgeschlossen werden muss
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyframeTicket {
    pub generation: u64,
    pub keyframe: CameraState,
}

/// Zustandsautomat der automatischen Standort-Tour.
///
/// `Idle` zählt die Wartezeit herunter und plant dann den nächsten Schritt.
/// `Animating` gibt Keyframes einzeln aus; erst nach `complete_keyframe` folgt der nächste.
/// Jede neue Folge erhöht die Generation, ältere Tickets werden ignoriert.
#[derive(Debug, Clone)]
pub struct CameraTour {
    config: TourConfig,
    stops: Vec<TourStop>,
    index: usize,
    focused: Option<usize>,
    phase: TourPhase,
    generation: u64,
    pending: VecDeque<CameraState>,
    outstanding: bool,
    countdown: f32,
    holding: bool,
    started: bool,
    auto_advance: bool,
}

impl CameraTour {
    pub fn new(config: TourConfig) -> Self {
        let auto_advance = config.auto_start;
        Self {
            config,
            stops: Vec::new(),
            index: 0,
            focused: None,
            phase: TourPhase::Idle,
            generation: 0,
            pending: VecDeque::new(),
            outstanding: false,
            countdown: 0.0,
            holding: false,
            started: false,
            auto_advance,
        }
    }

    /// Ersetzt die Halte. Gleiche ID-Liste: keine Änderung (`false`).
    pub fn set_stops(&mut self, stops: Vec<TourStop>) -> bool {
        let unchanged = stops.len() == self.stops.len()
            && stops
                .iter()
                .zip(&self.stops)
                .all(|(a, b)| a.location.id == b.location.id);
        if unchanged {
            return false;
        }

        self.cancel();
        self.stops = stops;
        self.index = 0;
        self.focused = None;
        self.countdown = 0.0;
        self.holding = false;
        self.started = false;
        debug!("Tour reset with {} stops.", self.stops.len());
        true
    }

    /// Zählt im Leerlauf herunter und plant bei Ablauf den Schritt zum aktuellen Halt
    pub fn update(&mut self, dt: f32, planner: &CameraPathPlanner) -> Option<TourEvent> {
        if self.holding || self.stops.is_empty() || self.phase != TourPhase::Idle {
            return None;
        }
        if self.started && !self.auto_advance {
            return None;
        }

        self.countdown -= dt;
        if self.countdown > 0.0 {
            return None;
        }

        let index = self.index;
        let Some(curr) = self.stops[index].anchor else {
            debug!("No anchor for {}, skipping.", self.stops[index].location.name);
            self.advance();
            return Some(TourEvent::Skipped { index });
        };

        let len = self.stops.len();
        let prev = if len > 1 {
            self.stops[(index + len - 1) % len].anchor
        } else {
            None
        };

        let keyframes = planner.plan_step(prev, curr);
        self.started = true;
        self.focused = Some(index);
        self.generation += 1;
        let event = TourEvent::StepPlanned {
            index,
            generation: self.generation,
            keyframes: keyframes.len(),
        };

        if keyframes.is_empty() {
            self.advance();
        } else {
            self.pending = keyframes.into();
            self.outstanding = false;
            self.phase = TourPhase::Animating {
                generation: self.generation,
            };
        }
        debug!("Tour step to {} planned: {:?}", self.stops[index].location.name, event);
        Some(event)
    }

    /// Nächster Keyframe in Ausgabereihenfolge; `None`, solange einer aussteht
    pub fn next_keyframe(&mut self) -> Option<KeyframeTicket> {
        let TourPhase::Animating { generation } = self.phase else {
            return None;
        };
        if self.outstanding {
            return None;
        }
        let keyframe = self.pending.pop_front()?;
        self.outstanding = true;
        Some(KeyframeTicket {
            generation,
            keyframe,
        })
    }

    /// Meldet einen Keyframe als erreicht. Veraltete Generationen werden ignoriert (`false`).
    pub fn complete_keyframe(&mut self, generation: u64) -> bool {
        match self.phase {
            TourPhase::Animating { generation: current } if current == generation => {}
            _ => return false,
        }
        if !self.outstanding {
            return false;
        }

        self.outstanding = false;
        if self.pending.is_empty() {
            self.phase = TourPhase::Idle;
            self.advance();
        }
        true
    }

    /// Benutzer greift ein: laufende Folge verwerfen und anhalten
    pub fn begin_interaction(&mut self) {
        if !self.holding {
            debug!("User interaction, tour on hold.");
        }
        self.cancel();
        self.holding = true;
    }

    /// Nach `resume_delay` geht es mit dem Halt nach dem zuletzt angeflogenen weiter,
    /// egal ob der Flug abgebrochen wurde oder die Kamera dort schon stand
    pub fn end_interaction(&mut self) {
        if !self.holding {
            return;
        }
        self.holding = false;
        if let Some(focused) = self.focused.filter(|_| !self.stops.is_empty()) {
            self.index = (focused + 1) % self.stops.len();
        }
        self.countdown = self.config.resume_delay_seconds;
        self.started = false;
    }

    pub fn set_auto_advance(&mut self, enabled: bool) {
        self.auto_advance = enabled;
    }

    pub fn auto_advance(&self) -> bool {
        self.auto_advance
    }

    pub fn phase(&self) -> TourPhase {
        self.phase
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_holding(&self) -> bool {
        self.holding
    }

    pub fn stops(&self) -> &[TourStop] {
        &self.stops
    }

    /// Halt des zuletzt geplanten Schritts (Ziel der Kamera oder bereits erreicht)
    pub fn focused_stop(&self) -> Option<&TourStop> {
        self.focused.and_then(|index| self.stops.get(index))
    }

    fn advance(&mut self) {
        if !self.stops.is_empty() {
            self.index = (self.index + 1) % self.stops.len();
        }
        self.countdown = self.config.dwell_seconds;
    }

    fn cancel(&mut self) {
        if matches!(self.phase, TourPhase::Animating { .. }) {
            // Neue Generation entwertet alle ausgegebenen Tickets
            self.generation += 1;
        }
        self.pending.clear();
        self.outstanding = false;
        self.phase = TourPhase::Idle;
    }
}
