/*
 * Responsibility
 * - Handler から見える「呼び出し元コンテキスト」の型
 * - middleware が trusted headers を書き、extractor はそれを読むだけ
 *
 * Notes
 * - oauth lookup / header の除去は middleware/services 側の責務
 * - `caller_id == 0` は「identity なし」(anonymous)
 */

/// Identity resolved for the current request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallerCtx {
    pub caller_id: i64,
    pub client_id: i64,
    pub public: bool,
}

impl CallerCtx {
    pub fn is_anonymous(&self) -> bool {
        self.caller_id == 0
    }
}
