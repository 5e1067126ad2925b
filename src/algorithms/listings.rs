// Code listings shown above each step's action line

pub const BUBBLE_SORT: &str = "// Bubble Sort Implementation
for (int i = 0; i < n - 1; i++) {
    for (int j = 0; j < n - i - 1; j++) {
        if (arr[j] > arr[j + 1]) swap(arr[j], arr[j + 1]);
    }
}";

pub const SELECTION_SORT: &str = "// Selection Sort Implementation
for (int i = 0; i < n - 1; i++) {
    int min = i;
    for (int j = i + 1; j < n; j++) {
        if (arr[j] < arr[min]) min = j;
    }
    swap(arr[i], arr[min]);
}";

pub const INSERTION_SORT: &str = "// Insertion Sort Implementation
for (int i = 1; i < n; i++) {
    int key = arr[i];
    int j = i - 1;
    while (j >= 0 && arr[j] > key) {
        arr[j + 1] = arr[j];
        j--;
    }
    arr[j + 1] = key;
}";

pub const MERGE_SORT: &str = "// Merge Sort Implementation
void mergeSort(int arr[], int l, int r) {
    if (l < r) {
        int m = (l + r) / 2;
        mergeSort(arr, l, m);
        mergeSort(arr, m + 1, r);
        merge(arr, l, m, r);
    }
}";

pub const LINEAR_SEARCH: &str = "// Linear Search Implementation
for (int i = 0; i < n; i++) {
    if (arr[i] == target) return i;
}";

pub const BINARY_SEARCH: &str = "// Binary Search Implementation
int low = 0, high = n - 1;
while (low <= high) {
    int mid = (low + high) / 2;
    if (arr[mid] == target) return mid;
    else if (arr[mid] < target) low = mid + 1;
    else high = mid - 1;
}";

pub const JUMP_SEARCH: &str = "// Jump Search Implementation
int step = sqrt(n), prev = 0;
while (arr[min(step, n) - 1] < target) {
    prev = step;
    step += sqrt(n);
}
for (int i = prev; i < min(step, n); i++) {
    if (arr[i] == target) return i;
}";

pub const INTERPOLATION_SEARCH: &str = "// Interpolation Search Implementation
int low = 0, high = n - 1;
while (low <= high && target >= arr[low] && target <= arr[high]) {
    int pos = low + ((target - arr[low]) * (high - low)) / (arr[high] - arr[low]);
    if (arr[pos] == target) return pos;
    if (arr[pos] < target) low = pos + 1;
    else high = pos - 1;
}";
