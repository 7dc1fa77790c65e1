use std::{
    sync::{
        mpsc::{channel, Receiver},
        Arc, Mutex,
    },
    thread::spawn,
};

/// Runs `process_fn` over `inputs` on `threads` workers, yielding outputs as they complete.
pub struct ThreadPool<Output> {
    output_receiver: Receiver<Output>,
}

impl<Output> ThreadPool<Output>
where
    Output: 'static + Send,
{
    pub fn new<Input: 'static + Send + Sync>(
        threads: usize,
        process_fn: impl Fn(Input) -> Output + 'static + Sync + Send,
        inputs: impl Iterator<Item = Input>,
    ) -> Self {
        let (input_sender, input_receiver) = channel::<Input>();
        let input_receiver = Arc::new(Mutex::new(input_receiver));
        let (output_sender, output_receiver) = channel();

        let process_fn = Arc::new(process_fn);
        for _ in 0..threads {
            let input_receiver = input_receiver.clone();
            let output_sender = output_sender.clone();
            let process_fn = process_fn.clone();
            spawn(move || loop {
                let input = match input_receiver.lock() {
                    Ok(receiver) => receiver.recv(),
                    Err(_) => break,
                };
                let Ok(input) = input else { break };
                // the receiving side was dropped, nobody wants the rest
                if output_sender.send(process_fn(input)).is_err() {
                    break;
                }
            });
        }
        for input in inputs {
            if input_sender.send(input).is_err() {
                break;
            }
        }
        Self { output_receiver }
    }
}

impl<Output> Iterator for ThreadPool<Output> {
    type Item = Output;

    fn next(&mut self) -> Option<Self::Item> {
        self.output_receiver.recv().ok()
    }
}
