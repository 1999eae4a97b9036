// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pick field driven by a console "toolkit".
//!
//! This example shows how a host wires up `understory_pick_field`:
//! - forwarding touch events and telling scrolls apart from taps,
//! - rendering the choice dialog when asked and reporting the pick back,
//! - arming a second field with an asynchronous custom callback.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p understory_demos --example pick_field_console`

use std::task::Poll;
use std::thread;

use futures::executor::block_on;
use futures::future::poll_fn;

use kurbo::Point;
use understory_event_state::tap::TouchEvent;
use understory_pick_field::{
    ChoiceDialog, ChoiceSet, Deferred, FieldConfig, FieldHost, HostError, PickField, ResolveOutcome,
    TouchOutcome,
};

/// Prints what a real toolkit would draw.
struct ConsoleHost;

impl FieldHost for ConsoleHost {
    fn hide_soft_input(&mut self) -> Result<(), HostError> {
        // No keyboard on a console.
        Err(HostError::SoftInputUnavailable)
    }

    fn present_dialog(&mut self, dialog: &ChoiceDialog) {
        println!("┌ {}", dialog.title());
        for (i, label) in dialog.labels().iter().enumerate() {
            println!("│ {i}: {label}");
        }
        println!("└");
    }
}

#[derive(Clone, Debug, PartialEq)]
struct Country {
    code: &'static str,
    name: &'static str,
}

fn press(field: &mut PickField<impl Sized>, host: &mut ConsoleHost, path: &[Point]) -> TouchOutcome {
    let Some((first, rest)) = path.split_first() else {
        return TouchOutcome::Passthrough;
    };
    field.handle_touch(TouchEvent::Down(*first), host);
    for p in rest {
        field.handle_touch(TouchEvent::Move(*p), host);
    }
    field.handle_touch(TouchEvent::Up(*path.last().unwrap_or(first)), host)
}

fn main() {
    env_logger::init();
    let mut host = ConsoleHost;

    // A choice field over structured items.
    let mut country: PickField<Country> =
        PickField::new(FieldConfig::default().with_hint("*Country"));
    country.set_choices(ChoiceSet::with_projector(
        vec![
            Country { code: "PT", name: "Portugal" },
            Country { code: "NO", name: "Norway" },
            Country { code: "JP", name: "Japan" },
        ],
        |c: &Country| format!("{} ({})", c.name, c.code),
    ));
    country.set_selection_listener(|c: &Country, i| println!("listener: picked {} at {i}", c.code));
    country.set_error("Country is required");

    // A scroll that starts on the field does nothing.
    let scroll = [
        Point::new(40.0, 200.0),
        Point::new(40.0, 180.0),
        Point::new(40.0, 120.0),
    ];
    println!("scroll -> {:?}", press(&mut country, &mut host, &scroll));

    // A tap opens the dialog.
    let tap = [Point::new(40.0, 200.0), Point::new(42.0, 201.0)];
    println!("tap -> {:?}", press(&mut country, &mut host, &tap));

    // The user picks Norway.
    country.on_dialog_pick(1);
    println!(
        "text={:?} selected={:?} error={:?}",
        country.text(),
        country.selected_item().ok(),
        country.error()
    );

    // A field resolved by a slow lookup on another thread.
    let mut city: PickField<String> = PickField::new(FieldConfig::default().with_hint("City"));
    city.set_disambiguation_callback(|current| {
        let (resolver, deferred) = Deferred::channel();
        let query = current.to_string();
        thread::spawn(move || {
            let answer = if query.is_empty() { "Oslo" } else { "Bergen" };
            resolver.resolve(answer);
        });
        deferred
    });

    let outcome = press(&mut city, &mut host, &tap);
    println!("city tap -> {outcome:?}");
    if outcome == TouchOutcome::Resolved(ResolveOutcome::Pending) {
        // Stand-in for the toolkit's event loop: sleep until the resolver wakes us.
        let settled = block_on(poll_fn(|cx| match city.poll_resolution_with(cx) {
            Some(ResolveOutcome::Pending) => Poll::Pending,
            other => Poll::Ready(other),
        }));
        println!("city poll -> {settled:?}");
    }
    println!("city text={:?}", city.text());
}
