//! Synthetic Hangouts takeout generator for stress testing hangstats.
//!
//! Usage: cargo run --features gen-test --bin gen_test -- [conversations] [events] [output]
//! Example: cargo run --features gen-test --bin gen_test -- 50 20000 raw/Hangouts.json

use rand::Rng;
use rand::seq::SliceRandom;
use serde_json::{Value, json};
use std::env;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::time::Instant;

const NAMES: &[&str] = &[
    "Alice",
    "Bob",
    "Иван",
    "Мария",
    "村上",
    "محمد",
    "User;With;Semicolons",
    "User\"With\"Quotes",
    "🔥FireUser🔥",
    "",
];

const GROUP_NAMES: &[&str] = &[
    "Trip Planning",
    "Best Friends",
    "Семья",
    "週末",
    "Work;Stuff",
    "🎉 Party 🎉",
];

// 2015-01-01T00:00:00Z
const START_US: i64 = 1_420_070_400_000_000;

fn main() {
    let args: Vec<String> = env::args().collect();

    let conversations: usize = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(20);
    let events: usize = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(10_000);
    let output = args.get(3).map(|s| s.as_str()).unwrap_or("Hangouts.json");

    println!("🧪 Hangouts Takeout Generator");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("   Conversations: {}", conversations);
    println!("   Events/conv:   {}", events);
    println!("   Output:        {}", output);
    println!();

    if let Err(e) = generate(conversations, events, output) {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn generate(conversations: usize, events: usize, output: &str) -> io::Result<()> {
    let file = File::create(output)?;
    let mut writer = BufWriter::with_capacity(1024 * 1024, file);
    let mut rng = rand::thread_rng();

    let start = Instant::now();
    let mut total_events = 0usize;

    writeln!(writer, "{{")?;
    writeln!(writer, "  \"conversation_state\": [")?;

    for i in 0..conversations {
        let conversation = generate_conversation(&mut rng, i, events);
        total_events += events;

        write!(writer, "    ")?;
        serde_json::to_writer(&mut writer, &conversation)?;
        let comma = if i + 1 < conversations { "," } else { "" };
        writeln!(writer, "{}", comma)?;

        eprint!("\r   Generated {}/{} conversations", i + 1, conversations);
    }

    writeln!(writer, "  ]")?;
    writeln!(writer, "}}")?;
    writer.flush()?;

    let elapsed = start.elapsed();
    let mb = std::fs::metadata(output)?.len() as f64 / 1_000_000.0;

    println!("\n\n✅ Done!");
    println!("   Size:  {:.2} MB", mb);
    println!("   Time:  {:.2}s", elapsed.as_secs_f64());
    println!(
        "   Speed: {:.0} events/s",
        total_events as f64 / elapsed.as_secs_f64()
    );

    Ok(())
}

fn generate_conversation(rng: &mut impl Rng, index: usize, events: usize) -> Value {
    let is_group = index % 3 != 0;
    let member_count = if is_group { rng.gen_range(3..=8) } else { 2 };

    let mut members: Vec<String> = (0..member_count)
        .map(|m| format!("{}", 100_000 + index * 100 + m))
        .collect();

    let participant_data: Vec<Value> = members
        .iter()
        .map(|id| {
            // Some takeouts omit fallback_name entirely
            if rng.gen_bool(0.1) {
                json!({"id": {"chat_id": id, "gaia_id": id}})
            } else {
                json!({
                    "id": {"chat_id": id, "gaia_id": id},
                    "fallback_name": NAMES.choose(rng).copied().unwrap_or("Alice")
                })
            }
        })
        .collect();

    let mut event_list = Vec::with_capacity(events);
    let mut next_member = member_count;

    for e in 0..events {
        let timestamp = START_US + (index as i64) * 1_000_000_000 + (e as i64) * 60_000_000;
        let sender = if rng.gen_bool(0.02) {
            // Former member no longer in the roster
            "999999999".to_string()
        } else {
            members.choose(rng).cloned().unwrap_or_default()
        };

        let event = match e % 50 {
            0 if is_group => json!({
                "sender_id": {"chat_id": sender},
                "timestamp": timestamp.to_string(),
                "event_type": "RENAME_CONVERSATION",
                "conversation_rename": {
                    "new_name": GROUP_NAMES.choose(rng).copied().unwrap_or("Group"),
                    "old_name": ""
                }
            }),
            1 if is_group => {
                let id = format!("{}", 100_000 + index * 100 + next_member);
                next_member += 1;
                members.push(id.clone());
                json!({
                    "sender_id": {"chat_id": sender},
                    "timestamp": timestamp.to_string(),
                    "event_type": "ADD_USER",
                    "membership_change": {"type": "JOIN", "participant_id": [{"chat_id": id}]}
                })
            }
            2 if is_group => {
                let removed = members.choose(rng).cloned().unwrap_or_default();
                json!({
                    "sender_id": {"chat_id": sender},
                    "timestamp": timestamp.to_string(),
                    "event_type": "REMOVE_USER",
                    "membership_change": {"type": "LEAVE", "participant_id": [{"chat_id": removed}]}
                })
            }
            3 => json!({
                "sender_id": {"chat_id": sender},
                "timestamp": timestamp.to_string(),
                "event_type": "HANGOUT_EVENT",
                "hangout_event": {"event_type": "START_HANGOUT"}
            }),
            4 => json!({
                "sender_id": {"chat_id": sender},
                "timestamp": timestamp.to_string(),
                "event_type": "HANGOUT_EVENT",
                "hangout_event": {
                    "event_type": "END_HANGOUT",
                    "hangout_duration_secs": rng.gen_range(10..7200).to_string()
                }
            }),
            5 => json!({
                "sender_id": {"chat_id": sender},
                "timestamp": timestamp.to_string(),
                "event_type": "OTR_MODIFICATION"
            }),
            _ => json!({
                "sender_id": {"chat_id": sender},
                "timestamp": timestamp.to_string(),
                "event_type": "REGULAR_CHAT_MESSAGE",
                "chat_message": {"message_content": {"segment": [{"type": "TEXT", "text": format!("Message #{}", e)}]}}
            }),
        };
        event_list.push(event);
    }

    let mut conversation = json!({
        "type": if is_group { "GROUP" } else { "STICKY_ONE_TO_ONE" },
        "participant_data": participant_data
    });
    if is_group && index % 4 != 1 {
        conversation["name"] = json!(GROUP_NAMES.choose(rng).copied().unwrap_or("Group"));
    }

    json!({
        "conversation_id": {"id": format!("Ugx{:08}", index)},
        "conversation_state": {
            "conversation_id": {"id": format!("Ugx{:08}", index)},
            "conversation": conversation,
            "event": event_list
        }
    })
}
