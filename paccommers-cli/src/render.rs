//! Plain-text grid tables and amount formatting for terminal output.

/// Format an amount with comma thousands separators and a fixed number of
/// decimals: `format_amount(2450000.0, 0)` is `"2,450,000"`.
pub fn format_amount(amount: f64, decimals: usize) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let fixed = format!("{:.*}", decimals, amount.abs());
    let (whole, frac) = match fixed.split_once('.') {
        Some((w, f)) => (w, Some(f)),
        None => (fixed.as_str(), None),
    };

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac {
        Some(f) => format!("{}{}.{}", sign, grouped, f),
        None => format!("{}{}", sign, grouped),
    }
}

/// Format a Rupiah amount, e.g. `Rp 2,205,000.00`.
pub fn format_rupiah(amount: f64, decimals: usize) -> String {
    format!("Rp {}", format_amount(amount, decimals))
}

/// Render a grid table. Cells may span several lines (split on `\n`).
///
/// ```text
/// +------+----------+
/// | Tier | Discount |
/// +======+==========+
/// | GOLD | 10%      |
/// +------+----------+
/// ```
pub fn grid_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let columns = headers.len();
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate().take(columns) {
            let longest = cell.lines().map(|l| l.chars().count()).max().unwrap_or(0);
            widths[i] = widths[i].max(longest);
        }
    }

    let rule = |fill: char| -> String {
        let mut line = String::from("+");
        for w in &widths {
            line.extend(std::iter::repeat(fill).take(w + 2));
            line.push('+');
        }
        line
    };

    let render_row = |cells: Vec<&str>| -> Vec<String> {
        let split: Vec<Vec<&str>> = cells.iter().map(|c| c.split('\n').collect()).collect();
        let height = split.iter().map(Vec::len).max().unwrap_or(1);
        (0..height)
            .map(|line_idx| {
                let mut line = String::from("|");
                for (col, width) in widths.iter().enumerate() {
                    let text = split
                        .get(col)
                        .and_then(|lines| lines.get(line_idx))
                        .copied()
                        .unwrap_or("");
                    line.push_str(&format!(" {:<width$} |", text, width = width));
                }
                line
            })
            .collect()
    };

    let mut out = vec![rule('-')];
    out.extend(render_row(headers.to_vec()));
    out.push(rule('='));
    for row in rows {
        let cells: Vec<&str> = (0..columns)
            .map(|i| row.get(i).map(String::as_str).unwrap_or(""))
            .collect();
        out.extend(render_row(cells));
        out.push(rule('-'));
    }
    if rows.is_empty() {
        out.pop();
        out.push(rule('-'));
    }
    out.join("\n")
}
