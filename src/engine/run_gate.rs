// ==========================================
// 橄榄球比赛统计系统 - 运行代次闸门
// ==========================================
// 职责: 为每次报表计算分配单调递增的代次
// 用途: 调用方并发提交多个批次时，只展示最新一次的结果，过期结果直接丢弃
// ==========================================

use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Default)]
pub struct RunGate {
    generation: AtomicU64,
}

impl RunGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// 开始一次新运行，返回其代次（从 1 开始）
    pub fn begin(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// 该代次是否仍是最新一次运行
    pub fn is_current(&self, generation: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_newer_run_supersedes_older() {
        let gate = RunGate::new();
        let first = gate.begin();
        let second = gate.begin();

        assert_eq!((first, second), (1, 2));
        assert!(!gate.is_current(first));
        assert!(gate.is_current(second));
    }

    #[test]
    fn test_concurrent_generations_are_unique() {
        let gate = Arc::new(RunGate::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let gate = gate.clone();
                thread::spawn(move || gate.begin())
            })
            .collect();

        let mut generations: Vec<u64> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        generations.sort_unstable();
        generations.dedup();

        assert_eq!(generations.len(), 8);
        assert!(gate.is_current(8));
    }
}
