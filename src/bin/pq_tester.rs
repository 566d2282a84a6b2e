//! Interactive exerciser for the priority queues
//!
//! ```bash
//! cargo run --bin pq_tester -- pairing
//! RUST_LOG=debug cargo run --bin pq_tester
//! ```
//!
//! Picks a queue kind from the first argument (name or menu index) or asks
//! for it on stdin, then runs a fixed set of checks through the shared
//! interface. Exits with status 1 on an unknown kind or a failed check.

use log::{debug, info};
use priority_queues::{AddressableQueue, Less, PairingPQ, PqKind, PriorityQueue};
use std::cell::Cell;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use std::rc::Rc;

type CheckResult = Result<(), String>;

fn ensure(ok: bool, what: &str) -> CheckResult {
    if ok {
        debug!("ok: {what}");
        Ok(())
    } else {
        Err(format!("check failed: {what}"))
    }
}

fn exercise_basic(mut pq: Box<dyn PriorityQueue<i32, Less>>) -> CheckResult {
    pq.push(3);
    ensure(pq.top() == Some(&3), "top after first push")?;
    pq.push(4);
    ensure(pq.len() == 2 && pq.top() == Some(&4), "top after second push")?;
    pq.pop();
    ensure(pq.len() == 1 && pq.top() == Some(&3), "top after pop")?;
    pq.pop();
    ensure(pq.is_empty(), "empty after popping everything")?;

    for (value, expected_top) in [(5, 5), (2, 5), (10, 10), (3, 10)] {
        pq.push(value);
        ensure(pq.top() == Some(&expected_top), "top while pushing 5, 2, 10, 3")?;
    }
    pq.pop();
    ensure(pq.top() == Some(&5), "top after popping 10")?;
    pq.pop();
    ensure(pq.top() == Some(&3) && pq.len() == 2, "top after popping 5")?;

    for value in [29, 31, 60, 56, 21, 42, 35, 11, 9, 0, 1] {
        pq.push(value);
    }
    ensure(pq.len() == 13 && pq.top() == Some(&60), "top after bulk pushes")?;
    pq.pop();
    ensure(pq.len() == 12 && pq.top() == Some(&56), "top after popping 60")?;
    Ok(())
}

fn exercise_update_priorities(kind: PqKind) -> CheckResult {
    let cells: Vec<Rc<Cell<i32>>> = [1, 5, 21, 32].iter().map(|&v| Rc::new(Cell::new(v))).collect();
    let comp = |a: &Rc<Cell<i32>>, b: &Rc<Cell<i32>>| a.get() < b.get();
    let mut pq = kind.build_from(cells.iter().cloned(), comp);

    cells[0].set(10);
    cells[3].set(0);
    cells[1].set(50);
    cells[2].set(29);
    pq.update_priorities();
    ensure(pq.top().map(|c| c.get()) == Some(50), "top after update_priorities")?;

    let order: Vec<i32> = std::iter::from_fn(|| pq.pop()).map(|c| c.get()).collect();
    ensure(order == [50, 29, 10, 0], "pop order after update_priorities")
}

fn exercise_pairing() -> CheckResult {
    let mut pq1 = PairingPQ::from_iter_with([0, 1, 2, 10, 7], Less);
    let mut pq2 = pq1.clone();
    let mut pq3 = PairingPQ::new();
    pq3.clone_from(&pq2);

    pq1.push(3);
    pq2.pop();
    ensure(pq2.top() == Some(&7), "copy top after pop")?;
    ensure(pq1.len() == 6 && pq2.len() == 4, "sizes after diverging")?;
    ensure(pq1.top() == Some(&10), "original unaffected by copy")?;

    let handle = pq3.add_node(5);
    pq3.update_elt(handle, 20).map_err(|e| e.to_string())?;
    ensure(pq3.top() == Some(&20), "top after raising to 20")?;
    let handle = pq3.add_node(5);
    pq3.update_elt(handle, 15).map_err(|e| e.to_string())?;
    ensure(pq3.top() == Some(&20), "top after raising to 15")?;
    Ok(())
}

fn read_choice() -> io::Result<String> {
    if let Some(arg) = std::env::args().nth(1) {
        return Ok(arg);
    }

    println!("PQ tester\n");
    for (i, kind) in PqKind::ALL.iter().enumerate() {
        println!("  {i}) {kind}");
    }
    print!("\nSelect one: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line)
}

fn run(kind: PqKind) -> CheckResult {
    println!("Testing priority queue: {kind}");
    exercise_basic(kind.build(Less))?;
    println!("basic checks succeeded");

    println!("Testing update_priorities() on {kind}");
    exercise_update_priorities(kind)?;
    println!("update_priorities checks succeeded");

    if kind == PqKind::Pairing {
        println!("Testing pairing heap separately");
        exercise_pairing()?;
        println!("pairing checks succeeded");
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let choice = match read_choice() {
        Ok(choice) => choice,
        Err(err) => {
            eprintln!("failed to read choice: {err}");
            return ExitCode::FAILURE;
        }
    };
    let kind: PqKind = match choice.parse() {
        Ok(kind) => kind,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };
    info!("selected {kind}");

    match run(kind) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{kind}: {err}");
            ExitCode::FAILURE
        }
    }
}
