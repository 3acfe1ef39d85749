use can_chart::txt::parse;
use can_chart::{ColumnSchema, query};

fn main() {
    let log_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "demos/trace.txt".to_string());
    let schema = ColumnSchema::timestamp_id_dlc();

    match parse::from_file(&log_path, &schema) {
        Ok(table) => {
            println!("Records: {} (skipped {})", table.len(), table.skipped_lines);

            let ids = table.distinct_message_ids();
            println!(
                "Message IDs: {:?}",
                ids.iter().map(|i| i.as_str()).collect::<Vec<_>>()
            );

            let (t_min, t_max) = query::timestamp_extent(&table);
            println!("Time extent: {:.6} .. {:.6}", t_min, t_max);

            let selected: Vec<&str> = ids.iter().map(|i| i.as_str()).collect();
            for (id, sig) in query::series(&table, selected) {
                println!("\nSignal {} ({} samples)", id, sig.len());
                for (byte, channel) in sig.byte_channels.iter().enumerate() {
                    let present = channel.iter().filter(|v| v.is_some()).count();
                    println!("\tByte {}: {} values", byte, present);
                }
            }
        }
        Err(e) => eprintln!("Error: {}", e),
    }
}
