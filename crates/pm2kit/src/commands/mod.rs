pub mod list;
pub mod stop_here;

#[cfg(test)]
pub(crate) mod fake {
    use async_trait::async_trait;
    use pm2kit_core::{ProcessId, ProcessRecord, Supervisor, SupervisorError};
    use std::sync::Mutex;

    /// In-memory supervisor recording every stop request
    pub struct FakeSupervisor {
        list: Mutex<Option<pm2kit_core::Result<Vec<ProcessRecord>>>>,
        failing: Vec<ProcessId>,
        pub stopped: Mutex<Vec<ProcessId>>,
    }

    impl FakeSupervisor {
        pub fn with_json(json: &str) -> Self {
            Self {
                list: Mutex::new(Some(pm2kit_core::parse_process_list(json))),
                failing: Vec::new(),
                stopped: Mutex::new(Vec::new()),
            }
        }

        pub fn failing_on(mut self, id: ProcessId) -> Self {
            self.failing.push(id);
            self
        }

        pub fn stop_calls(&self) -> Vec<ProcessId> {
            self.stopped.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Supervisor for FakeSupervisor {
        fn name(&self) -> &str {
            "fake-pm2"
        }

        async fn list_processes(&self) -> pm2kit_core::Result<Vec<ProcessRecord>> {
            self.list
                .lock()
                .unwrap()
                .take()
                .expect("list_processes called twice")
        }

        async fn stop_process(&self, id: &ProcessId) -> pm2kit_core::Result<()> {
            self.stopped.lock().unwrap().push(id.clone());
            if self.failing.contains(id) {
                return Err(SupervisorError::CommandFailed {
                    status: "exit status: 1".to_string(),
                    stderr: format!("process {} not found", id),
                });
            }
            Ok(())
        }
    }
}
