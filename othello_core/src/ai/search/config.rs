use tracing::warn;

/// 探索の幅・深さの設定。
///
/// 範囲外の値は `new` で丸める。探索中は変更されない（値で渡す）。
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct SearchConfig {
    /// 各手番で残す候補の割合（0..=5、5分の何か）。
    breadth: u8,
    /// 先読みの最大深さ（0..=8）。
    depth: u8,
}

impl SearchConfig {
    /// 幅の上限（全候補を残す）。
    pub const MAX_BREADTH: u8 = 5;

    /// 深さの上限。
    pub const MAX_DEPTH: u8 = 8;

    /// 各手番で残す候補の割合を返す。
    #[inline]
    #[must_use]
    pub const fn breadth(self) -> u8 {
        self.breadth
    }

    /// 並べた `len` 個の候補のうち残す数（最低 1）を返す。
    #[inline]
    #[must_use]
    pub fn breadth_count(self, len: usize) -> usize {
        let kept = len
            .saturating_mul(usize::from(self.breadth))
            .checked_div(usize::from(Self::MAX_BREADTH))
            .unwrap_or(len);
        kept.max(1)
    }

    /// 先読みの最大深さを返す。
    #[inline]
    #[must_use]
    pub const fn depth(self) -> u8 {
        self.depth
    }

    /// 設定を生成する。範囲外の値は上限に丸める。
    #[inline]
    #[must_use]
    pub fn new(breadth: u8, depth: u8) -> Self {
        if breadth > Self::MAX_BREADTH {
            warn!(breadth, max = Self::MAX_BREADTH, "search breadth clamped");
        }
        if depth > Self::MAX_DEPTH {
            warn!(depth, max = Self::MAX_DEPTH, "search depth clamped");
        }

        Self {
            breadth: breadth.min(Self::MAX_BREADTH),
            depth: depth.min(Self::MAX_DEPTH),
        }
    }
}
