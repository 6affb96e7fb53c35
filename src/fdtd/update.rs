use ndarray::{s, ArrayView2, ArrayViewMut2, Zip};

use crate::fdtd::{Grid1D, Grid2D};

/// Updates `Hx` and `Hy` from the `Ez` slice at `time - 1`.
///
/// The two components read the same electric field and write disjoint arrays,
/// so they are computed as a pair of tasks on the rayon pool and joined before
/// returning. Does nothing on a grid still at time `0`.
pub fn update_magnetic(grid: &mut Grid2D) {
    if grid.time == 0 {
        return;
    }
    let Grid2D { hx, chxh, chxe, hy, chyh, chye, ez, time, .. } = grid;
    let ez = ez.slice(*time - 1);

    rayon::join(
        || update_hx(hx.view_mut(), chxh.view(), chxe.view(), ez),
        || update_hy(hy.view_mut(), chyh.view(), chye.view(), ez),
    );
}

fn update_hx(
    hx: ArrayViewMut2<f64>,
    chxh: ArrayView2<f64>,
    chxe: ArrayView2<f64>,
    ez: ArrayView2<f64>,
) {
    Zip::from(hx)
        .and(chxh)
        .and(chxe)
        .and(ez.slice(s![.., 1..]))
        .and(ez.slice(s![.., ..-1]))
        .for_each(|h, &ch, &ce, &ez_above, &ez_here| {
            *h = ch * *h - ce * (ez_above - ez_here);
        });
}

fn update_hy(
    hy: ArrayViewMut2<f64>,
    chyh: ArrayView2<f64>,
    chye: ArrayView2<f64>,
    ez: ArrayView2<f64>,
) {
    Zip::from(hy)
        .and(chyh)
        .and(chye)
        .and(ez.slice(s![1.., ..]))
        .and(ez.slice(s![..-1, ..]))
        .for_each(|h, &ch, &ce, &ez_right, &ez_here| {
            *h = ch * *h + ce * (ez_right - ez_here);
        });
}

/// Updates the interior of the `Ez` slice at `time` from the slice at `time - 1`.
///
/// Edge cells are left untouched for the absorbing boundary. Does nothing on a
/// grid still at time `0`.
pub fn update_electric(grid: &mut Grid2D) {
    if grid.time == 0 {
        return;
    }
    let Grid2D { hx, hy, ez, ceze, cezh, time, .. } = grid;
    let (prev, mut cur) = ez.split(*time);

    Zip::indexed(cur.slice_mut(s![1..-1, 1..-1]))
        .and(prev.slice(s![1..-1, 1..-1]))
        .and(ceze.slice(s![1..-1, 1..-1]))
        .and(cezh.slice(s![1..-1, 1..-1]))
        .for_each(|(i, j), e, &e_prev, &ce, &ch| {
            let (m, n) = (i + 1, j + 1);
            *e = ce * e_prev
                + ch * ((hy[[m, n]] - hy[[m - 1, n]]) - (hx[[m, n]] - hx[[m, n - 1]]));
        });
}

/// Updates `Hy` of an incident grid.
pub fn update_magnetic_1d(grid: &mut Grid1D) {
    let Grid1D { hy, chyh, chye, ez, .. } = grid;

    Zip::from(hy)
        .and(&*chyh)
        .and(&*chye)
        .and(ez.windows(2))
        .for_each(|h, &ch, &ce, e| {
            *h = ch * *h + ce * (e[1] - e[0]);
        });
}

/// Updates `Ez` of an incident grid, leaving both end nodes untouched.
pub fn update_electric_1d(grid: &mut Grid1D) {
    let Grid1D { hy, ez, ceze, cezh, .. } = grid;

    Zip::from(ez.slice_mut(s![1..-1]))
        .and(ceze.slice(s![1..-1]))
        .and(cezh.slice(s![1..-1]))
        .and(hy.windows(2))
        .for_each(|e, &ce, &ch, h| {
            *e = ce * *e + ch * (h[1] - h[0]);
        });
}
