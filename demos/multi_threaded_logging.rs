use std::sync::mpsc::channel;

fn main() {
    duolog::set_priority(duolog::Priority::Trace);
    duolog::info!("Hello, world from the main thread!");

    if !duolog::enable_file_output_to("/tmp/duolog-demo.log") {
        duolog::error!("unable to open /tmp/duolog-demo.log");
        return;
    }

    let (handles, senders): (Vec<_>, Vec<_>) = (0..5)
        .map(|i| {
            let (sender, receiver) = channel::<&'static str>();
            (
                std::thread::spawn(move || {
                    for message in receiver {
                        duolog::warn!("thread {i} received: {message}");
                    }
                }),
                sender,
            )
        })
        .unzip();
    for sender in senders {
        sender.send("Hello, world!").unwrap();
    }
    for handle in handles {
        handle.join().unwrap();
    }
    duolog::info!(
        "last line of /tmp/duolog-demo.log is:\n\t{}",
        std::fs::read_to_string("/tmp/duolog-demo.log")
            .unwrap()
            .trim_end()
            .lines()
            .last()
            .unwrap()
    );
}
