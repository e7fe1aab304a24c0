use super::config::SearchConfig;

/// 探索統計。
#[derive(Default, Clone, Copy, Debug, Eq, PartialEq)]
pub struct SearchStats {
    /// 到達した最大の深さ（ply）。
    max_level: u8,
    /// 探索したノード数。
    nodes: u64,
}

impl SearchStats {
    /// 到達した最大の深さを返す。
    #[inline]
    #[must_use]
    pub const fn max_level(&self) -> u8 {
        self.max_level
    }

    /// 探索したノード数を返す。
    #[inline]
    #[must_use]
    pub const fn nodes(&self) -> u64 {
        self.nodes
    }

    /// `level` のノードを1つ数える。
    pub(super) fn visit(&mut self, level: u8) {
        self.nodes = self.nodes.wrapping_add(1);
        self.max_level = self.max_level.max(level);
    }
}

/// 探索実行に必要な共有コンテキスト。
pub(super) struct SearchContext {
    /// 探索設定。
    config: SearchConfig,
    /// 探索統計。
    stats: SearchStats,
}

impl SearchContext {
    /// 探索設定を返す。
    pub(super) const fn config(&self) -> SearchConfig {
        self.config
    }

    /// 探索コンテキストを生成する。
    pub(super) fn new(config: SearchConfig) -> Self {
        Self {
            config,
            stats: SearchStats::default(),
        }
    }

    /// 探索統計を返す。
    pub(super) const fn stats(&self) -> SearchStats {
        self.stats
    }

    /// 探索統計への可変参照を返す。
    pub(super) const fn stats_mut(&mut self) -> &mut SearchStats {
        &mut self.stats
    }
}
