//! A deliberately small queue model that drives a `TraceObserver`.
//!
//! Passengers arrive uniformly inside each flight's arrival window, walk to
//! the shortest eligible ticket queue (in-person) or straight to security
//! (online), and walk on to their flight's hold room.  Counters and
//! checkpoints serve whole passengers per minute from a fractional credit.
//! At departure the hold room empties; anyone of that flight still upstream
//! is flagged missed and leaves the terminal.

use std::collections::VecDeque;

use ap_core::curve::DEFAULT_BOARDING_CLOSE;
use ap_core::{
    ClockTime, FlightId, HoldRoomConfig, LineKind, Passenger, PassengerId, RunClock, RunConfig,
};
use ap_trace::{SeriesKind, Snapshot, TraceObserver};
use log::debug;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

pub struct ToyModel<'a> {
    config: &'a RunConfig,
    seed:   u64,
}

struct Floor {
    ticket:            Vec<VecDeque<PassengerId>>,
    ticket_credit:     Vec<f64>,
    checkpoint:        Vec<VecDeque<PassengerId>>,
    checkpoint_credit: Vec<f64>,
    /// `(minute the passenger reaches the room, passenger)`.
    walking:           Vec<(u32, PassengerId)>,
    hold:              Vec<Vec<PassengerId>>,
}

impl<'a> ToyModel<'a> {
    /// `config` must already have passed `RunConfig::validate`.
    pub fn new(config: &'a RunConfig, seed: u64) -> Self {
        Self { config, seed }
    }

    /// Run every minute from run start to the last departure, reporting to
    /// `observer`.  Returns the number of passengers generated.
    pub fn run(&self, observer: &mut impl TraceObserver) -> usize {
        let config = self.config;
        let run_start = RunClock::for_config(config).run_start;
        let offset = |t: ClockTime| (t.minute_of_day() + 1_440 - run_start.minute_of_day()) % 1_440;

        let departures: Vec<u32> = config.flights.iter().map(|f| offset(f.departure)).collect();
        let horizon = departures.iter().copied().max().map_or(0, |d| d as usize + 1);
        let close = config
            .arrival_curve
            .as_ref()
            .map_or(DEFAULT_BOARDING_CLOSE, |c| c.boarding_close_or_default());
        let span = config.effective_arrival_span();
        let rooms: Vec<Option<usize>> = config
            .flights
            .iter()
            .enumerate()
            .map(|(i, f)| room_for(&config.hold_rooms, &f.number, i))
            .collect();

        // ── Generate arrivals ───────────────────────────────────────────
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut passengers: Vec<Passenger> = Vec::new();
        let mut joins: Vec<Vec<PassengerId>> = vec![Vec::new(); horizon];
        for (i, flight) in config.flights.iter().enumerate() {
            let flight_id = FlightId(i as u32);
            let open = departures[i].saturating_sub(span);
            let last = departures[i].saturating_sub(close).max(open + 1);
            let mut per_minute = vec![0u32; horizon];
            for _ in 0..flight.expected_passengers() {
                let minute = rng.gen_range(open..last);
                let id = PassengerId(passengers.len() as u32);
                let mut p = Passenger::new(flight_id, rng.gen_bool(config.percent_in_person));
                p.arrival_minute = Some(minute);
                passengers.push(p);
                if let Some(count) = per_minute.get_mut(minute as usize) {
                    *count += 1;
                }
                if let Some(slot) = joins.get_mut((minute + config.transit_delay_minutes) as usize) {
                    slot.push(id);
                }
            }
            observer.on_arrivals(flight_id, &per_minute);
        }

        let mut floor = Floor {
            ticket:            vec![VecDeque::new(); config.counters.len()],
            ticket_credit:     vec![0.0; config.counters.len()],
            checkpoint:        vec![VecDeque::new(); config.checkpoints.len()],
            checkpoint_credit: vec![0.0; config.checkpoints.len()],
            walking:           Vec::new(),
            hold:              vec![Vec::new(); config.hold_rooms.len()],
        };

        // ── Minute loop ─────────────────────────────────────────────────
        for t in 0..horizon {
            let minute = t as u32;

            for &id in &joins[t] {
                let p = &passengers[id.index()];
                let counter = if p.in_person {
                    shortest(&floor.ticket, |k| config.counters[k].serves(p.flight))
                } else {
                    None
                };
                match counter {
                    Some(k) => floor.ticket[k].push_back(id),
                    None => self.to_checkpoint(&mut floor, &rooms, &passengers, id, minute),
                }
            }

            for k in 0..floor.ticket.len() {
                floor.ticket_credit[k] += config.counters[k].rate_per_minute;
                while floor.ticket_credit[k] >= 1.0 {
                    let Some(id) = floor.ticket[k].pop_front() else { break };
                    floor.ticket_credit[k] -= 1.0;
                    passengers[id.index()].ticket_done_minute = Some(minute);
                    self.to_checkpoint(&mut floor, &rooms, &passengers, id, minute);
                }
                if floor.ticket[k].is_empty() {
                    floor.ticket_credit[k] = floor.ticket_credit[k].min(1.0);
                }
            }

            for k in 0..floor.checkpoint.len() {
                floor.checkpoint_credit[k] += config.checkpoints[k].rate_per_hour / 60.0;
                while floor.checkpoint_credit[k] >= 1.0 {
                    let Some(id) = floor.checkpoint[k].pop_front() else { break };
                    floor.checkpoint_credit[k] -= 1.0;
                    passengers[id.index()].checkpoint_done_minute = Some(minute);
                    self.walk_to_hold(&mut floor, &rooms, &passengers, id, minute);
                }
                if floor.checkpoint[k].is_empty() {
                    floor.checkpoint_credit[k] = floor.checkpoint_credit[k].min(1.0);
                }
            }

            let (arrived, still_walking): (Vec<_>, Vec<_>) =
                floor.walking.drain(..).partition(|&(ready, _)| ready <= minute);
            floor.walking = still_walking;
            for (_, id) in arrived {
                let p = &mut passengers[id.index()];
                if let Some(room) = rooms[p.flight.index()] {
                    p.hold_entry_minute = Some(minute);
                    floor.hold[room].push(id);
                }
            }

            for (i, &departure) in departures.iter().enumerate() {
                if departure == minute {
                    depart(&mut floor, &mut passengers, FlightId(i as u32));
                }
            }

            let snapshot = floor.snapshot();
            report_series(observer, t, &snapshot);
            observer.on_interval(t, &snapshot);
        }

        debug!("toy model finished: {horizon} minutes, {} passengers", passengers.len());
        let live = floor.snapshot();
        observer.on_run_end(&passengers, &live);
        passengers.len()
    }

    fn to_checkpoint(
        &self,
        floor: &mut Floor,
        rooms: &[Option<usize>],
        passengers: &[Passenger],
        id: PassengerId,
        minute: u32,
    ) {
        match shortest(&floor.checkpoint, |_| true) {
            Some(k) => floor.checkpoint[k].push_back(id),
            None => self.walk_to_hold(floor, rooms, passengers, id, minute),
        }
    }

    fn walk_to_hold(
        &self,
        floor: &mut Floor,
        rooms: &[Option<usize>],
        passengers: &[Passenger],
        id: PassengerId,
        minute: u32,
    ) {
        let walk = rooms[passengers[id.index()].flight.index()]
            .map_or(0, |room| self.config.hold_rooms[room].walk_minutes());
        floor.walking.push((minute + self.config.hold_delay_minutes + walk, id));
    }
}

impl Floor {
    fn snapshot(&self) -> Snapshot {
        Snapshot::new(
            self.ticket.iter().map(|q| q.iter().copied().collect()).collect(),
            self.checkpoint.iter().map(|q| q.iter().copied().collect()).collect(),
            self.hold.clone(),
        )
    }
}

/// Board `flight`: its hold-room occupants leave, everyone else of that
/// flight is flagged missed and removed.
fn depart(floor: &mut Floor, passengers: &mut [Passenger], flight: FlightId) {
    let of_flight = |id: &PassengerId| passengers[id.index()].flight == flight;

    let mut missed: Vec<PassengerId> = Vec::new();
    for queue in floor.ticket.iter_mut().chain(floor.checkpoint.iter_mut()) {
        missed.extend(queue.iter().copied().filter(of_flight));
        queue.retain(|id| !of_flight(id));
    }
    missed.extend(floor.walking.iter().map(|&(_, id)| id).filter(of_flight));
    floor.walking.retain(|(_, id)| !of_flight(id));
    for room in &mut floor.hold {
        room.retain(|id| !of_flight(id));
    }

    debug!("{flight} departed, {} missed", missed.len());
    for id in missed {
        passengers[id.index()].missed = true;
    }
}

fn report_series(observer: &mut impl TraceObserver, t: usize, snapshot: &Snapshot) {
    let ticket = snapshot.occupancy(LineKind::TicketCounter);
    let checkpoint = snapshot.occupancy(LineKind::Checkpoint);
    observer.on_series(SeriesKind::TicketQueued, t, ticket);
    observer.on_series(SeriesKind::CheckpointQueued, t, checkpoint);
    observer.on_series(SeriesKind::HoldRoomTotal, t, snapshot.occupancy(LineKind::HoldRoom));
    observer.on_series(SeriesKind::HeldUp, t, ticket + checkpoint);
}

fn shortest(lines: &[VecDeque<PassengerId>], eligible: impl Fn(usize) -> bool) -> Option<usize> {
    lines
        .iter()
        .enumerate()
        .filter(|&(k, _)| eligible(k))
        .min_by_key(|(_, q)| q.len())
        .map(|(k, _)| k)
}

/// A room that names the flight, else one of the unrestricted rooms.
fn room_for(rooms: &[HoldRoomConfig], number: &str, flight_index: usize) -> Option<usize> {
    if let Some(i) = rooms.iter().position(|r| r.allowed_flight_numbers.contains(number)) {
        return Some(i);
    }
    let open: Vec<usize> = rooms
        .iter()
        .enumerate()
        .filter(|(_, r)| r.allowed_flight_numbers.is_empty())
        .map(|(i, _)| i)
        .collect();
    if open.is_empty() {
        None
    } else {
        Some(open[flight_index % open.len()])
    }
}
